use dioxus::prelude::*;

use newspulse_core::news::NewsItem;

use crate::utils::truncate_chars;

/// Longest content preview shown on a card; the full story lives in the
/// detail overlay.
const PREVIEW_MAX_CHARS: usize = 280;

/// One news story in the result grid. Clicking anywhere on the card opens
/// the detail overlay for its story.
#[component]
pub fn NewsCard(item: NewsItem, on_select: EventHandler<NewsItem>) -> Element {
    let preview = truncate_chars(&item.content, PREVIEW_MAX_CHARS);
    let picked = item.clone();

    rsx! {
        article {
            class: "np-card",
            onclick: move |_| on_select.call(picked.clone()),

            header { class: "np-card-header",
                h3 { class: "np-card-title", "{item.title}" }
            }
            div { class: "np-card-body",
                p { class: "np-card-snippet", "{preview}" }
            }
        }
    }
}
