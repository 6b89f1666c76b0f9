//! Search view components: the search bar, result cards, detail overlay,
//! and the empty state shown before the first search.

mod detail_overlay;
mod empty_state;
mod news_card;
mod search_card;
mod search_view;

pub use detail_overlay::DetailOverlay;
pub use empty_state::EmptyState;
pub use news_card::NewsCard;
pub use search_card::SearchCard;
pub use search_view::SearchView;
