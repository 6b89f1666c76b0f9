use dioxus::prelude::*;

/// Banner band and the dashboard title.
#[component]
pub fn Masthead() -> Element {
    rsx! {
        div { class: "np-banner", "aria-hidden": "true" }

        header { class: "np-header",
            h1 { class: "np-title", "AI News" }
        }
    }
}
