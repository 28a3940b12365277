//! Presentational configuration and startup checks for the navigation tables.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::models::{NavEntry, TeamEntry, UserMenuEntry};
use crate::shared::constants::{NAVIGATION, PLACEHOLDER_PATH, SETTINGS, TEAMS, USER_NAVIGATION};
use crate::shared::errors::{Result, ShellError};

/// Copy and image sources shown by the shell. Missing fields fall back to
/// the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub brand_name: String,
    pub logo_url: String,
    pub logo_alt: String,
    pub user_name: String,
    pub avatar_url: String,
    pub search_placeholder: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            brand_name: "Rhabdosoma Solutions".to_string(),
            logo_url: "https://tailwindui.com/img/logos/mark.svg?color=indigo&shade=600".to_string(),
            logo_alt: "MDS".to_string(),
            user_name: "Emilia Clarke".to_string(),
            avatar_url: "#".to_string(),
            search_placeholder: "Search...".to_string(),
        }
    }
}

impl ShellConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

fn check_path(label: &str, path: &str, allow_placeholder: bool) -> Option<ShellError> {
    let placeholder = allow_placeholder && path == PLACEHOLDER_PATH;
    if placeholder || path.starts_with('/') {
        None
    } else {
        Some(ShellError::InvalidPath {
            label: label.to_string(),
            path: path.to_string(),
        })
    }
}

fn check_label(label: &str, path: &str) -> Option<ShellError> {
    label.trim().is_empty().then(|| ShellError::EmptyLabel {
        path: path.to_string(),
    })
}

/// Collects every configuration defect in the given tables.
pub fn validate_tables(
    navigation: &[NavEntry],
    settings: &NavEntry,
    teams: &[TeamEntry],
    user_menu: &[UserMenuEntry],
) -> Vec<ShellError> {
    let mut defects = Vec::new();
    let mut seen_paths = HashSet::new();

    for entry in navigation.iter().chain(std::iter::once(settings)) {
        defects.extend(check_label(entry.label, entry.path));
        defects.extend(check_path(entry.label, entry.path, false));
        if !seen_paths.insert(entry.path) {
            defects.push(ShellError::DuplicatePath(entry.path.to_string()));
        }
    }

    let mut seen_ids = HashSet::new();
    for team in teams {
        defects.extend(check_label(team.label, team.path));
        defects.extend(check_path(team.label, team.path, true));
        if team.initial.chars().count() != 2 {
            defects.push(ShellError::InvalidInitial {
                label: team.label.to_string(),
                initial: team.initial.to_string(),
            });
        }
        if !seen_ids.insert(team.id) {
            defects.push(ShellError::DuplicateTeamId(team.id));
        }
    }

    for entry in user_menu {
        defects.extend(check_label(entry.label, entry.path));
        defects.extend(check_path(entry.label, entry.path, false));
    }

    defects
}

/// Validates the compiled-in tables.
pub fn validate_navigation() -> Vec<ShellError> {
    validate_tables(&NAVIGATION, &SETTINGS, &TEAMS, &USER_NAVIGATION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Icon;

    #[test]
    fn test_builtin_tables_are_valid() {
        let defects = validate_navigation();
        assert!(defects.is_empty(), "unexpected defects: {:?}", defects);
    }

    #[test]
    fn test_default_config_copy() {
        let config = ShellConfig::default();
        assert_eq!(config.brand_name, "Rhabdosoma Solutions");
        assert_eq!(config.search_placeholder, "Search...");
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let config = ShellConfig::from_json(r#"{"user_name": "Ada Lovelace"}"#).unwrap();
        assert_eq!(config.user_name, "Ada Lovelace");
        assert_eq!(config.brand_name, ShellConfig::default().brand_name);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = ShellConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ShellError::ConfigParse(_)));
    }

    #[test]
    fn test_detects_defects() {
        let navigation = [
            NavEntry { label: "Overview", path: "/", icon: Icon::Home },
            NavEntry { label: "", path: "alerts", icon: Icon::Users },
            NavEntry { label: "Again", path: "/", icon: Icon::Home },
        ];
        let settings = NavEntry { label: "Settings", path: "/settings", icon: Icon::Cog };
        let teams = [
            TeamEntry { id: 1, label: "A", path: "#", initial: "A", is_current: false },
            TeamEntry { id: 1, label: "B", path: "#", initial: "BB", is_current: false },
        ];
        let user_menu = [UserMenuEntry { label: "Sign out", path: "#" }];

        let defects = validate_tables(&navigation, &settings, &teams, &user_menu);

        assert!(defects.iter().any(|d| matches!(d, ShellError::EmptyLabel { path } if path == "alerts")));
        assert!(defects.iter().any(|d| matches!(d, ShellError::InvalidPath { path, .. } if path == "alerts")));
        assert!(defects.iter().any(|d| matches!(d, ShellError::DuplicatePath(p) if p == "/")));
        assert!(defects.iter().any(|d| matches!(d, ShellError::InvalidInitial { label, .. } if label == "A")));
        assert!(defects.iter().any(|d| matches!(d, ShellError::DuplicateTeamId(1))));
        // The placeholder path is only accepted for team shortcuts.
        assert!(defects.iter().any(|d| matches!(d, ShellError::InvalidPath { label, .. } if label == "Sign out")));
        assert_eq!(defects.len(), 6);
    }
}
