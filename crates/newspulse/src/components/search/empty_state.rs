use dioxus::prelude::*;

/// Empty state shown before the first search and after searches with no hits
#[component]
pub fn EmptyState() -> Element {
    rsx! {
        section { class: "np-empty-state",
            p { class: "np-empty-title", "AI News Search" }
            p { class: "np-empty-text", "Find any news fast on one click!" }
        }
    }
}
