//! Logging
//!
//! Routes `tracing` events to the browser console.

/// Install the panic hook and the console subscriber. Call once, first thing in `main`.
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        api_base = %crate::config::app_config().api_base,
        "starting DevBoard frontend"
    );
}
