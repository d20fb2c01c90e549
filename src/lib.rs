//! # bakehouse-client
//!
//! Leptos + WASM storefront/admin client for the Bakehouse bakery.
//!
//! This crate contains pages, components, the client session state (token
//! storage, decoding, and rehydration), and the REST helpers that talk to
//! the external bakery API. The order-management pages are placeholders.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
