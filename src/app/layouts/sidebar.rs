use dioxus::prelude::*;

use crate::app::components::{NavItemLink, TeamLink};
use crate::config::ShellConfig;
use crate::domain::services::{nav_entry_style, settings_style, team_style};
use crate::shared::constants::{HOME_PATH, NAVIGATION, SETTINGS, TEAMS};
use crate::shared::hooks::{activate_link, use_current_path, UsePanelReturn};

/// Sidebar body shared by the desktop column and the mobile slide-over.
///
/// Both renderings go through the same tables and the same resolver; only
/// the mobile one passes its panel so link activation also closes it.
#[component]
pub fn SidebarContent(#[props(default)] panel: Option<UsePanelReturn>) -> Element {
    let config = use_context::<ShellConfig>();
    let current_path = use_current_path();
    let origin = match panel {
        Some(panel) => panel.name(),
        None => "desktop_sidebar",
    };

    rsx! {
        div { class: "c-sidebar",
            div { class: "c-sidebar__brand",
                a {
                    href: HOME_PATH,
                    class: "c-sidebar__logo",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        activate_link(panel, HOME_PATH, origin);
                    },
                    img {
                        class: "c-sidebar__logo-image",
                        src: "{config.logo_url}",
                        alt: "{config.logo_alt}",
                    }
                }
                span { class: "c-sidebar__brand-name", "{config.brand_name}" }
            }

            nav { class: "c-sidebar__nav",
                ul { class: "c-sidebar__sections",
                    li {
                        ul { class: "c-sidebar__list",
                            for entry in NAVIGATION.iter().copied() {
                                li { key: "{entry.path}",
                                    NavItemLink {
                                        entry,
                                        variant: nav_entry_style(&entry, &current_path),
                                        origin,
                                        panel,
                                    }
                                }
                            }
                        }
                    }

                    li {
                        div { class: "c-sidebar__heading", "Your teams" }
                        ul { class: "c-sidebar__list c-sidebar__list--teams",
                            for team in TEAMS.iter().copied() {
                                li { key: "{team.label}",
                                    TeamLink {
                                        team,
                                        variant: team_style(&team, &current_path),
                                        origin,
                                        panel,
                                    }
                                }
                            }
                        }
                    }

                    li { class: "c-sidebar__footer",
                        NavItemLink {
                            entry: SETTINGS,
                            variant: settings_style(&current_path),
                            origin,
                            panel,
                        }
                    }
                }
            }
        }
    }
}
