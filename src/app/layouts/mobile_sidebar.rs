use dioxus::prelude::*;

use crate::app::components::Glyph;
use crate::app::layouts::SidebarContent;
use crate::domain::models::Icon;
use crate::shared::hooks::UsePanelReturn;

/// Dismissible slide-over navigation for narrow viewports.
///
/// Only mounted while the panel is open. Closes on the close button, a
/// backdrop click, Escape, or any link activation inside it.
#[component]
pub fn MobileSidebar(panel: UsePanelReturn) -> Element {
    let mut panel = panel;

    if !panel.is_open() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "c-mobile-sidebar",
            role: "dialog",
            "aria-modal": "true",
            "aria-label": "Navigation",
            tabindex: "-1",
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: move |evt: Event<KeyboardData>| {
                if evt.key() == Key::Escape {
                    evt.prevent_default();
                    panel.close("escape");
                }
            },

            // Backdrop
            div {
                class: "c-mobile-sidebar__backdrop",
                onclick: move |_| panel.close("backdrop"),
            }

            div { class: "c-mobile-sidebar__container",
                div { class: "c-mobile-sidebar__panel",
                    div { class: "c-mobile-sidebar__close",
                        button {
                            r#type: "button",
                            class: "c-icon-button c-icon-button--inverse",
                            onclick: move |_| panel.close("close_button"),
                            span { class: "u-sr-only", "Close sidebar" }
                            Glyph { icon: Icon::XMark }
                        }
                    }

                    SidebarContent { panel: Some(panel) }
                }
            }
        }
    }
}
