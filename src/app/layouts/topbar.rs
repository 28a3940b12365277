use dioxus::prelude::*;

use crate::app::components::{Glyph, ProfileMenu, SearchField};
use crate::domain::models::Icon;
use crate::shared::hooks::UsePanelReturn;

/// Sticky top bar: menu button (narrow only), search, notifications, profile.
#[component]
pub fn Topbar(sidebar: UsePanelReturn) -> Element {
    let mut sidebar = sidebar;

    rsx! {
        div { class: "c-topbar",
            button {
                r#type: "button",
                class: "c-icon-button c-topbar__menu-button",
                onclick: move |_| sidebar.open(),
                span { class: "u-sr-only", "Open sidebar" }
                Glyph { icon: Icon::Bars }
            }

            // Separator
            div { class: "c-topbar__divider c-topbar__divider--mobile", "aria-hidden": "true" }

            div { class: "c-topbar__row",
                SearchField {}

                div { class: "c-topbar__actions",
                    button {
                        r#type: "button",
                        class: "c-icon-button c-icon-button--muted",
                        span { class: "u-sr-only", "View notifications" }
                        Glyph { icon: Icon::Bell }
                    }

                    // Separator
                    div { class: "c-topbar__divider c-topbar__divider--desktop", "aria-hidden": "true" }

                    ProfileMenu {}
                }
            }
        }
    }
}
