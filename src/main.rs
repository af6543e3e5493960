//! Steppy web front-end - Main Entry Point
//!
//! Launches the Dioxus application. The renderer (web, desktop or server) is chosen
//! by the enabled feature.

use steppy_web::app::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] Steppy - WASM initialized!".into());
    dioxus::launch(App);
}

// Native entry point (desktop shell or server-side rendering)
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Initialize tracing BEFORE launch
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();

    tracing::info!("Starting Steppy...");
    dioxus::launch(App);
}
