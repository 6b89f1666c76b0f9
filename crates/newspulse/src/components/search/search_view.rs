use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;

use newspulse_core::news::NewsItem;
use newspulse_core::session::SearchSession;

use crate::components::{use_news_client, use_toasts};

use super::{DetailOverlay, EmptyState, NewsCard, SearchCard};

// Messages for search coroutine
enum SearchMessage {
    Submit(String), // raw input text
}

/// Main search view: search bar, result grid, and the story detail overlay.
///
/// Each submission runs as its own task, so a slow request never blocks a
/// newer one. The session decides which outcome is current; superseded
/// outcomes are dropped on arrival.
#[component]
pub fn SearchView(session: Signal<SearchSession>) -> Element {
    let search_input = use_signal(String::new);
    let client = use_news_client();
    let toasts = use_toasts();

    // Search coroutine - validates submissions and spawns one fetch task each
    let search_task = use_coroutine({
        let mut session_signal = session;
        let client = client.clone();

        move |mut rx: UnboundedReceiver<SearchMessage>| {
            let client = client.clone();
            async move {
                while let Some(msg) = rx.next().await {
                    match msg {
                        SearchMessage::Submit(raw_input) => {
                            let ticket = match session_signal.with_mut(|s| s.begin_search(&raw_input)) {
                                Ok(ticket) => ticket,
                                Err(notice) => {
                                    toasts.push(notice);
                                    continue;
                                }
                            };

                            info!("searching news for '{}'", ticket.topic());

                            let client_for_spawn = client.clone();
                            let toasts_for_spawn = toasts;
                            let mut session_for_spawn = session_signal;

                            spawn(async move {
                                let outcome = client_for_spawn.fetch_news(ticket.topic()).await;

                                // Record the topic in history once the fetch settles.
                                // Best-effort: failures are logged, never surfaced.
                                let history_client = client_for_spawn.clone();
                                let topic = ticket.topic().to_string();
                                spawn(async move {
                                    if let Err(err) = history_client.record_history(&topic).await {
                                        warn!("failed to record '{}' in history: {}", topic, err);
                                    }
                                });

                                match &outcome {
                                    Ok(items) => info!(
                                        "search for '{}' returned {} stories",
                                        ticket.topic(),
                                        items.len()
                                    ),
                                    Err(err) => {
                                        warn!("search for '{}' failed: {}", ticket.topic(), err)
                                    }
                                }

                                let notice =
                                    session_for_spawn.with_mut(|s| s.apply(&ticket, outcome));
                                if let Some(notice) = notice {
                                    toasts_for_spawn.push(notice);
                                }
                            });
                        }
                    }
                }
            }
        }
    });

    let handle_search = move |raw_input: String| {
        search_task.send(SearchMessage::Submit(raw_input));
    };

    // Snapshot session state for this render
    let is_loading = session.read().loading();
    let items = session.read().results().to_vec();
    let selected = session.read().selected().cloned();
    let show_empty_state = items.is_empty() && !is_loading;

    rsx! {
        section { class: "np-search-view",

            SearchCard {
                search_input,
                on_search: handle_search,
            }

            if is_loading {
                div { class: "np-loading", role: "status", "aria-label": "Loading news",
                    div { class: "np-spinner" }
                }
            } else {
                div { class: "np-grid",
                    for item in items.iter() {
                        NewsCard {
                            key: "{item.id}",
                            item: item.clone(),
                            on_select: move |picked: NewsItem| {
                                session.with_mut(|s| s.select(picked));
                            },
                        }
                    }
                }
            }

            if show_empty_state {
                EmptyState {}
            }
        }

        // Story detail overlay (shown while a card is selected)
        if let Some(item) = selected {
            DetailOverlay {
                item,
                on_close: move |_| {
                    session.with_mut(|s| s.clear_selection());
                },
            }
        }
    }
}
