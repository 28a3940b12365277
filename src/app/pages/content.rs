//! Routed pages rendered into the shell's content slot.
//!
//! Placeholders: the real dashboards are supplied by the application.

use dioxus::prelude::*;

use crate::app::components::Card;
use crate::app::pages::Route;

#[component]
pub fn Overview() -> Element {
    rsx! {
        Card {
            title: "Overview".to_string(),
            subtitle: "Current state of the monitored systems".to_string(),
            p { "Select a section in the navigation to get started." }
        }
    }
}

#[component]
pub fn Alerts() -> Element {
    rsx! {
        Card {
            title: "Alerts".to_string(),
            ul { class: "c-link-list",
                for alert_id in ["1", "2", "3"] {
                    li { key: "{alert_id}",
                        Link {
                            to: Route::AlertDetail { alert_id: alert_id.to_string() },
                            "Alert #{alert_id}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AlertDetail(alert_id: String) -> Element {
    rsx! {
        Card {
            title: format!("Alert #{alert_id}"),
            Link { to: Route::Alerts {}, "← Back to alerts" }
        }
    }
}

#[component]
pub fn History() -> Element {
    rsx! {
        Card { title: "History".to_string(), p { "Past events will appear here." } }
    }
}

#[component]
pub fn Status() -> Element {
    rsx! {
        Card { title: "Status".to_string(), p { "All systems nominal." } }
    }
}

#[component]
pub fn Analysis() -> Element {
    rsx! {
        Card { title: "Analysis".to_string(), p { "No analysis has been run yet." } }
    }
}

#[component]
pub fn Help() -> Element {
    rsx! {
        Card { title: "Help".to_string(), p { "Documentation and support contacts." } }
    }
}

#[component]
pub fn Settings() -> Element {
    rsx! {
        Card { title: "Settings".to_string(), p { "Application preferences." } }
    }
}

#[component]
pub fn ProfileDetails() -> Element {
    rsx! {
        Card { title: "Your profile".to_string(), p { "Profile details." } }
    }
}

#[component]
pub fn Login() -> Element {
    rsx! {
        Card { title: "Signed out".to_string(), p { "You have been signed out." } }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        Card {
            title: "Page not found".to_string(),
            subtitle: path,
            Link { to: Route::Overview {}, "Go to overview" }
        }
    }
}
