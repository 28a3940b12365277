use dioxus::prelude::*;

use crate::app::components::Glyph;
use crate::config::ShellConfig;
use crate::domain::models::Icon;

/// Top bar search box. Keeps the query locally; submitting never reloads.
#[component]
pub fn SearchField() -> Element {
    let config = use_context::<ShellConfig>();
    let mut query = use_signal(String::new);

    rsx! {
        form {
            class: "c-search-field",
            action: "#",
            method: "GET",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                tracing::debug!(query_len = query.read().len(), "Search submitted");
            },
            label { r#for: "search-field", class: "u-sr-only", "Search" }
            Glyph { icon: Icon::MagnifyingGlass, class: "c-search-field__icon" }
            input {
                id: "search-field",
                class: "c-search-field__input",
                placeholder: "{config.search_placeholder}",
                r#type: "search",
                name: "search",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }
        }
    }
}
