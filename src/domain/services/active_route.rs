//! Active-route resolution for sidebar and menu links.
//!
//! Matching is exact string equality against the router's current path:
//! no prefix matching, no normalization, case-sensitive. A nested route such
//! as `/alerts/42` therefore leaves `/alerts` inactive.

use crate::domain::models::{NavEntry, TeamEntry, UserMenuEntry};
use crate::shared::constants::SETTINGS_PATH;

/// Outcome of comparing one entry against the current path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub is_active: bool,
}

/// Visual variant shared by every link family (main, settings, teams, user menu).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StyleVariant {
    #[default]
    Default,
    Active,
}

impl StyleVariant {
    /// BEM state class appended to the base class of a link, icon or badge.
    pub fn state_class(&self) -> &'static str {
        match self {
            StyleVariant::Default => "",
            StyleVariant::Active => "is-active",
        }
    }

    /// Value for `aria-current`, `None` when the link is not the current page.
    pub fn aria_current(&self) -> Option<&'static str> {
        match self {
            StyleVariant::Default => None,
            StyleVariant::Active => Some("page"),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, StyleVariant::Active)
    }
}

pub fn resolve(entry_path: &str, current_path: &str) -> Resolution {
    Resolution {
        is_active: entry_path == current_path,
    }
}

pub fn style(is_active: bool) -> StyleVariant {
    if is_active {
        StyleVariant::Active
    } else {
        StyleVariant::Default
    }
}

pub fn nav_entry_style(entry: &NavEntry, current_path: &str) -> StyleVariant {
    style(resolve(entry.path, current_path).is_active)
}

/// The settings link only ever compares against the literal settings path.
pub fn settings_style(current_path: &str) -> StyleVariant {
    style(resolve(SETTINGS_PATH, current_path).is_active)
}

/// Teams highlight from either their static `is_current` flag or a path match.
pub fn team_style(team: &TeamEntry, current_path: &str) -> StyleVariant {
    style(team.is_current || resolve(team.path, current_path).is_active)
}

pub fn user_menu_style(entry: &UserMenuEntry, current_path: &str) -> StyleVariant {
    style(resolve(entry.path, current_path).is_active)
}

/// Joins a base class with the variant's state class, skipping empty parts.
pub fn class_names(base: &str, variant: StyleVariant) -> String {
    [base, variant.state_class()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Icon;
    use crate::shared::constants::{NAVIGATION, TEAMS};

    fn team(path: &'static str, is_current: bool) -> TeamEntry {
        TeamEntry {
            id: 99,
            label: "Test Team",
            path,
            initial: "TT",
            is_current,
        }
    }

    #[test]
    fn test_resolve_is_exact_equality() {
        let paths = ["/", "/alerts", "/history", "/settings", "/Alerts", "/alerts/", ""];
        for entry in NAVIGATION.iter() {
            for current in paths {
                assert_eq!(
                    resolve(entry.path, current).is_active,
                    entry.path == current,
                    "entry {} vs current {}",
                    entry.path,
                    current
                );
            }
        }
    }

    #[test]
    fn test_nested_route_does_not_activate_parent() {
        let alerts = NavEntry {
            label: "Alerts",
            path: "/alerts",
            icon: Icon::Users,
        };
        assert!(!resolve("/alerts", "/alerts/42").is_active);
        assert_eq!(nav_entry_style(&alerts, "/alerts/42"), StyleVariant::Default);
        assert_eq!(nav_entry_style(&alerts, "/alerts"), StyleVariant::Active);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert!(!resolve("/alerts", "/Alerts").is_active);
        assert!(!resolve("/alerts", "/alerts/").is_active);
    }

    #[test]
    fn test_root_only_matches_root() {
        assert!(resolve("/", "/").is_active);
        assert!(!resolve("/", "/history").is_active);
    }

    #[test]
    fn test_style_mapping() {
        assert_eq!(style(true), StyleVariant::Active);
        assert_eq!(style(false), StyleVariant::Default);
        assert_eq!(StyleVariant::Active.aria_current(), Some("page"));
        assert_eq!(StyleVariant::Default.aria_current(), None);
    }

    #[test]
    fn test_settings_active_only_on_settings_path() {
        assert!(settings_style("/settings").is_active());
        assert!(!settings_style("/settings/profile").is_active());
        assert!(!settings_style("/").is_active());
        // No main navigation entry points at settings.
        assert!(NAVIGATION.iter().all(|entry| entry.path != SETTINGS_PATH));
    }

    #[test]
    fn test_team_current_flag_alone_activates() {
        let t = team("/teams/ops", true);
        assert_eq!(team_style(&t, "/history"), StyleVariant::Active);
    }

    #[test]
    fn test_team_path_match_alone_activates() {
        let t = team("/teams/ops", false);
        assert_eq!(team_style(&t, "/teams/ops"), StyleVariant::Active);
        assert_eq!(team_style(&t, "/teams"), StyleVariant::Default);
    }

    #[test]
    fn test_static_teams_never_highlight_on_real_routes() {
        for t in TEAMS.iter() {
            assert_eq!(team_style(t, "/"), StyleVariant::Default);
            assert_eq!(team_style(t, "/settings"), StyleVariant::Default);
        }
    }

    #[test]
    fn test_class_names() {
        assert_eq!(class_names("c-nav-link", StyleVariant::Default), "c-nav-link");
        assert_eq!(
            class_names("c-nav-link", StyleVariant::Active),
            "c-nav-link is-active"
        );
    }
}
