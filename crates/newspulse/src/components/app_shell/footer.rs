use dioxus::prelude::*;

/// Footer naming the external collaborators
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "np-footer",
            span { class: "np-footer-text",
                "Stories come from an external aggregator • Searches are saved to your history"
            }
        }
    }
}
