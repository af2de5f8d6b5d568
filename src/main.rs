//! Dataset Browser - Main Entry Point
//!
//! Serves the Dioxus application. The lineage REST endpoint is provided by the
//! lineage backend, configured through `DATASET_BROWSER_API_URL`.

use dataset_browser::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Dataset Browser...");

    dioxus::serve(|| async move { Ok(dioxus::server::router(App)) });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Dataset Browser - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    dioxus::launch(App);
}
