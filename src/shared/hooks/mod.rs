// Custom Dioxus hooks
pub mod use_current_path;
pub mod use_panel;

pub use use_current_path::use_current_path;
pub use use_panel::{activate_link, push_intent, use_panel, UsePanelReturn};
