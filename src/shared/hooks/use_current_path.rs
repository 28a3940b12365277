use crate::app::pages::Route;
use dioxus::prelude::*;

/// Current location path as rendered by the router, e.g. `/alerts/42`.
pub fn use_current_path() -> String {
    use_route::<Route>().to_string()
}
