use dioxus::prelude::*;

/// Search bar with input and submit button.
///
/// Submissions are passed through as typed, blanks included; the session
/// owns validation so an empty topic still surfaces its warning notice.
/// The controls stay enabled while a search is in flight, so the user can
/// always fire a newer search over a slow one.
#[component]
pub fn SearchCard(search_input: Signal<String>, on_search: EventHandler<String>) -> Element {
    let handle_keypress = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            on_search.call(search_input.read().clone());
        }
    };

    rsx! {
        div { class: "np-search-row",
            input {
                class: "np-search-input",
                r#type: "text",
                placeholder: "Search here",
                value: "{search_input}",
                required: true,
                oninput: move |evt| search_input.set(evt.value()),
                onkeypress: handle_keypress,
            }
            button {
                class: "np-btn np-btn--search",
                "aria-label": "Search news",
                onclick: move |_| on_search.call(search_input.read().clone()),
                "Search"
            }
        }
    }
}
