use dioxus::prelude::*;

use newspulse_core::news::NewsItem;

/// Story detail overlay showing the full content of a selected record.
///
/// Clicking the backdrop or the close button dismisses it; clicks inside the
/// panel are swallowed so the overlay stays open while reading.
#[component]
pub fn DetailOverlay(item: NewsItem, on_close: EventHandler<()>) -> Element {
    rsx! {
        // Overlay backdrop
        div {
            class: "np-overlay",
            onclick: move |_| on_close.call(()),

            // Story panel
            div {
                class: "np-detail",
                onclick: move |e| e.stop_propagation(), // Prevent closing when clicking inside

                header { class: "np-detail-header",
                    h2 { class: "np-detail-title", "{item.title}" }
                    button {
                        class: "np-icon-button",
                        onclick: move |_| on_close.call(()),
                        "aria-label": "Close story",
                        "✕"
                    }
                }

                div { class: "np-detail-content",
                    p { class: "np-detail-text", "{item.content}" }
                }
            }
        }
    }
}
