//! Static navigation tables.

use crate::domain::models::{Icon, NavEntry, TeamEntry, UserMenuEntry};

pub const HOME_PATH: &str = "/";
pub const SETTINGS_PATH: &str = "/settings";

/// Placeholder target for team shortcuts that have no page yet.
pub const PLACEHOLDER_PATH: &str = "#";

pub const NAVIGATION: [NavEntry; 6] = [
    NavEntry { label: "Overview", path: "/", icon: Icon::Home },
    NavEntry { label: "Alerts", path: "/alerts", icon: Icon::Users },
    NavEntry { label: "History", path: "/history", icon: Icon::Folder },
    NavEntry { label: "Status", path: "/status", icon: Icon::Calendar },
    NavEntry { label: "Analysis", path: "/analysis", icon: Icon::DocumentDuplicate },
    NavEntry { label: "Help", path: "/help", icon: Icon::ChartPie },
];

pub const SETTINGS: NavEntry = NavEntry {
    label: "Settings",
    path: SETTINGS_PATH,
    icon: Icon::Cog,
};

pub const TEAMS: [TeamEntry; 4] = [
    TeamEntry { id: 1, label: "Shohin A", path: PLACEHOLDER_PATH, initial: "SA", is_current: false },
    TeamEntry { id: 2, label: "Diego C", path: PLACEHOLDER_PATH, initial: "DC", is_current: false },
    TeamEntry { id: 3, label: "Spartak G", path: PLACEHOLDER_PATH, initial: "SG", is_current: false },
    TeamEntry { id: 4, label: "Diego G", path: PLACEHOLDER_PATH, initial: "DG", is_current: false },
];

pub const USER_NAVIGATION: [UserMenuEntry; 2] = [
    UserMenuEntry { label: "Your profile", path: "/profile-details" },
    UserMenuEntry { label: "Sign out", path: "/login" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_navigation_order() {
        let labels: Vec<_> = NAVIGATION.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec!["Overview", "Alerts", "History", "Status", "Analysis", "Help"]
        );
        assert_eq!(NAVIGATION[0].path, HOME_PATH);
    }

    #[test]
    fn test_navigation_paths_unique() {
        let paths: HashSet<_> = NAVIGATION.iter().map(|e| e.path).collect();
        assert_eq!(paths.len(), NAVIGATION.len());
    }

    #[test]
    fn test_team_initials_are_two_letters() {
        for team in TEAMS.iter() {
            assert_eq!(team.initial.chars().count(), 2, "team {}", team.label);
            assert!(!team.is_current);
        }
    }

    #[test]
    fn test_settings_entry() {
        assert_eq!(SETTINGS.path, "/settings");
        assert_eq!(SETTINGS.icon, Icon::Cog);
    }
}
