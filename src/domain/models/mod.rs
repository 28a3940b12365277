pub mod navigation;

pub use navigation::{Icon, NavEntry, TeamEntry, UserMenuEntry};
