//! UI components for the NewsPulse application.
//!
//! This module contains all Dioxus components that make up the user interface.
//!
//! # Component Architecture
//!
//! - `app_shell`: Masthead, Footer
//! - `search`: SearchView, SearchCard, NewsCard, DetailOverlay, EmptyState
//! - `toast`: notice queue and its renderer
//! - `assistant`: floating assistant popup
//!
//! # Context Providers
//!
//! Components use Dioxus context for shared state:
//!
//! ```ignore
//! // Read the current results from any component
//! let feed = use_news_feed();
//! let items = feed.items();
//!
//! // Surface a notice from anywhere in the tree
//! let toasts = use_toasts();
//! toasts.push(Notice::info("No news found for \"quantum\""));
//! ```

mod app_shell;
mod assistant;
pub mod search; // Public for SearchView re-export
mod toast;

pub use app_shell::{Footer, Masthead};
pub use assistant::AssistantPopup;
pub use search::SearchView;
pub use toast::{use_toasts, Toast, ToastHost, Toasts};

use dioxus::prelude::*;
use std::sync::Arc;

use newspulse_core::assistant::{AssistantClient, ReadableContext};
use newspulse_core::client::NewsClient;
use newspulse_core::config::Endpoints;
use newspulse_core::news::NewsItem;
use newspulse_core::session::SearchSession;

// ============================================================================
// Read-only news feed context
// ============================================================================

/// Read-only view of the search session for observers.
///
/// The assistant (and anything else that wants to watch the screen) consumes
/// session state through this interface instead of holding the writable
/// session signal. It can look, not touch.
#[derive(Clone, Copy)]
pub struct NewsFeed {
    session: ReadSignal<SearchSession>,
}

impl NewsFeed {
    pub fn new(session: ReadSignal<SearchSession>) -> Self {
        Self { session }
    }

    /// Current result list, in aggregator order.
    pub fn items(&self) -> Vec<NewsItem> {
        self.session.read().results().to_vec()
    }

    /// The most recently accepted search topic.
    pub fn topic(&self) -> String {
        self.session.read().topic().to_string()
    }

    /// Snapshot of the current results for the assistant runtime.
    pub fn readable_context(&self) -> ReadableContext {
        ReadableContext::news_results(self.session.read().results_json())
    }
}

/// Read-only feed of the current search results.
pub fn use_news_feed() -> NewsFeed {
    use_context::<NewsFeed>()
}

/// Shared client for the news aggregator and history services.
pub fn use_news_client() -> Arc<NewsClient> {
    use_context::<Arc<NewsClient>>()
}

/// Shared client for the assistant runtime.
pub fn use_assistant_client() -> Arc<AssistantClient> {
    use_context::<Arc<AssistantClient>>()
}

// ============================================================================
// App composition
// ============================================================================

#[component]
pub fn App() -> Element {
    // One session drives the whole dashboard
    let session = use_signal(SearchSession::new);
    use_context_provider(|| NewsFeed::new(session.into()));

    // Shared service clients; resolved endpoints live here only
    let endpoints = Endpoints::default();
    let assistant_runtime = endpoints.assistant_runtime().clone();
    use_context_provider(|| Arc::new(NewsClient::new(endpoints)));
    use_context_provider(|| Arc::new(AssistantClient::new(assistant_runtime)));

    // Notice queue rendered by ToastHost
    let notices = use_signal(Vec::<Toast>::new);
    let notice_counter = use_signal(|| 0u64);
    use_context_provider(|| Toasts::new(notices, notice_counter));

    rsx! {
        div { class: "np-app",
            Masthead {}

            main { class: "np-main",
                SearchView { session }
            }

            Footer {}

            // Overlaid chrome: notices and the assistant
            ToastHost {}
            AssistantPopup {}
        }
    }
}
