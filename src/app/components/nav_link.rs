use dioxus::prelude::*;

use crate::app::components::Glyph;
use crate::domain::models::{NavEntry, TeamEntry};
use crate::domain::services::{class_names, StyleVariant};
use crate::shared::constants::PLACEHOLDER_PATH;
use crate::shared::hooks::{activate_link, UsePanelReturn};

/// Sidebar row for a main navigation entry or the settings entry.
///
/// The click is intercepted so the router receives an explicit intent and,
/// when rendered inside the mobile panel, the panel closes in the same event.
#[component]
pub fn NavItemLink(
    entry: NavEntry,
    variant: StyleVariant,
    origin: &'static str,
    #[props(default)] panel: Option<UsePanelReturn>,
) -> Element {
    let path = entry.path;

    rsx! {
        a {
            href: "{path}",
            class: class_names("c-nav-link", variant),
            "aria-current": variant.aria_current(),
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                activate_link(panel, path, origin);
            },
            Glyph { icon: entry.icon, class: class_names("c-nav-link__icon", variant) }
            span { class: "c-nav-link__label", "{entry.label}" }
        }
    }
}

/// Team shortcut with its two-letter badge.
///
/// Teams pointing at the placeholder path are inert: no intent, and the
/// mobile panel stays open.
#[component]
pub fn TeamLink(
    team: TeamEntry,
    variant: StyleVariant,
    origin: &'static str,
    #[props(default)] panel: Option<UsePanelReturn>,
) -> Element {
    let path = team.path;

    rsx! {
        a {
            href: "{path}",
            class: class_names("c-nav-link", variant),
            "aria-current": variant.aria_current(),
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                if path != PLACEHOLDER_PATH {
                    activate_link(panel, path, origin);
                }
            },
            span { class: class_names("c-team-badge", variant), "{team.initial}" }
            span { class: "c-nav-link__label c-nav-link__label--truncate", "{team.label}" }
        }
    }
}
