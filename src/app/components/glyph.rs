use crate::domain::models::Icon;
use dioxus::prelude::*;

/// Decorative icon, hidden from screen readers.
#[component]
pub fn Glyph(icon: Icon, #[props(default, into)] class: String) -> Element {
    rsx! {
        span {
            class: "c-glyph {class}",
            "aria-hidden": "true",
            "{icon.glyph()}"
        }
    }
}
