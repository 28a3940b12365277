use crate::app::layouts::Shell;
use crate::app::pages::content::{
    AlertDetail, Alerts, Analysis, Help, History, Login, NotFound, Overview, ProfileDetails,
    Settings, Status,
};
use crate::config::{validate_navigation, ShellConfig};
use crate::shared::logging::log_config_validation;

use dioxus::prelude::*;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Overview {},
    #[route("/alerts")]
    Alerts {},
    // Nested detail page; leaves the "Alerts" entry inactive
    #[route("/alerts/:alert_id")]
    AlertDetail { alert_id: String },
    #[route("/history")]
    History {},
    #[route("/status")]
    Status {},
    #[route("/analysis")]
    Analysis {},
    #[route("/help")]
    Help {},
    #[route("/settings")]
    Settings {},

    // User menu targets
    #[route("/profile-details")]
    ProfileDetails {},
    #[route("/login")]
    Login {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(ShellConfig::default);

    use_hook(|| log_config_validation(&validate_navigation()));

    use_effect(|| {
        tracing::info!("Navigation shell initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}
