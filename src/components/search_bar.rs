//! Search Bar Component
//!
//! Text input feeding the name filter on every keystroke, plus an explicit
//! submit (Enter or the button) that re-applies the current draft.

use dioxus::prelude::*;

use crate::context::use_search_query;

/// Search Bar
///
/// Writes the shared query signal, which the gallery filters on reactively.
#[component]
pub fn SearchBar() -> Element {
    let mut query = use_search_query();
    let mut draft = use_signal(String::new);

    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            query.set(draft());
        }
    };

    rsx! {
        div { class: "search-bar",
            input {
                r#type: "search",
                class: "search-input",
                placeholder: "Search...",
                value: "{draft}",
                oninput: move |e| {
                    draft.set(e.value());
                    query.set(e.value());
                },
                onkeydown: on_keydown,
            }
            button {
                class: "search-submit",
                onclick: move |_| query.set(draft()),
                "\u{1F50D}"
            }
        }
    }
}
