//! # portfolio
//!
//! Leptos + WASM single-page portfolio site with a floating assistant
//! widget. The page itself is static marketing chrome (sections, nav,
//! translations); the widget owns a conversation with an externally
//! hosted assistant service and can scroll the host page to the section
//! a reply points at.
//!
//! This crate contains pages, components, application state, the
//! assistant HTTP client, and browser glue. Browser-only behavior is
//! gated behind the `hydrate` feature so all state and protocol logic
//! unit tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
