// Navigation logic
// Framework-agnostic, 100% testable

pub mod active_route;
pub mod panel;

pub use active_route::{
    class_names, nav_entry_style, resolve, settings_style, style, team_style, user_menu_style,
    Resolution, StyleVariant,
};
pub use panel::{LinkActivation, NavigationIntent, PanelVisibility};
