//! # modelarena
//!
//! Leptos + WASM admin console for managing LLM model endpoints, versioned
//! prompt templates, and comparative test runs against a REST backend.
//!
//! This crate contains pages, components, application state, the typed REST
//! client, and small config/lifecycle utilities. All authoritative data is
//! server-owned; the client mirrors records into memory for display.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the application into `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
