use dioxus::prelude::*;

use crate::app::components::Glyph;
use crate::config::ShellConfig;
use crate::domain::models::Icon;
use crate::domain::services::{class_names, user_menu_style};
use crate::shared::constants::USER_NAVIGATION;
use crate::shared::hooks::{use_current_path, use_panel};

/// Avatar button with the profile dropdown
#[component]
pub fn ProfileMenu() -> Element {
    let config = use_context::<ShellConfig>();
    let current_path = use_current_path();
    let mut menu = use_panel("profile_menu");

    rsx! {
        div {
            class: "c-profile-menu",
            onkeydown: move |evt: Event<KeyboardData>| {
                if evt.key() == Key::Escape {
                    menu.close("escape");
                }
            },

            button {
                r#type: "button",
                class: "c-profile-menu__button",
                "aria-haspopup": "menu",
                "aria-expanded": if menu.is_open() { "true" } else { "false" },
                onclick: move |_| menu.toggle(),
                span { class: "u-sr-only", "Open user menu" }
                img {
                    class: "c-profile-menu__avatar",
                    src: "{config.avatar_url}",
                    alt: "",
                }
                span { class: "c-profile-menu__name",
                    span { "aria-hidden": "true", "{config.user_name}" }
                    Glyph { icon: Icon::ChevronDown, class: "c-profile-menu__chevron" }
                }
            }

            if menu.is_open() {
                // Transparent backdrop catches outside clicks
                div {
                    class: "c-profile-menu__backdrop",
                    onclick: move |_| menu.close("backdrop"),
                }

                div { class: "c-profile-menu__items", role: "menu",
                    for entry in USER_NAVIGATION.iter().copied() {
                        a {
                            key: "{entry.label}",
                            href: "{entry.path}",
                            role: "menuitem",
                            class: class_names("c-profile-menu__item", user_menu_style(&entry, &current_path)),
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                menu.navigate(entry.path);
                            },
                            "{entry.label}"
                        }
                    }
                }
            }
        }
    }
}
