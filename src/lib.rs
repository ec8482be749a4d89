//! # redrecon-client
//!
//! Leptos + WASM frontend for the RedRecon cloud security-testing
//! dashboard. Every view renders client-side and talks to the backend
//! REST API through `net::api`; session state lives in cookie storage
//! managed by `util::session`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook, wire up console logging,
/// and hydrate the application shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
