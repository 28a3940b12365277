//! Rhabdosoma navigation shell - Main Entry Point
//!
//! Server-side rendering uses dioxus::serve() for dx serve compatibility;
//! browser and desktop builds launch the app directly.

use rhabdosoma_shell::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use rhabdosoma_shell::config::validate_navigation;
    use rhabdosoma_shell::shared::logging::log_config_validation;

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Rhabdosoma navigation shell...");

    dioxus::serve(|| async move {
        let defects = validate_navigation();
        log_config_validation(&defects);
        if let Some(first) = defects.into_iter().next() {
            return Err(anyhow::Error::new(first).context("navigation tables are misconfigured"));
        }

        Ok(dioxus::server::router(App))
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Rhabdosoma navigation shell - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
