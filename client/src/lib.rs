//! # client
//!
//! Leptos frontend for the security metrics dashboard.
//!
//! Pages compose two views: the static metrics panel (stat cards and SVG
//! charts) and the interactive collaborator table. Data and derivation logic
//! come from the `secmetrics` crate; this crate owns rendering, view-local
//! state, and chart geometry.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
