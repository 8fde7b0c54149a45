//! # vitals-client
//!
//! Leptos + WASM frontend for the Vitals health-tracking application.
//!
//! This crate contains the login and registration screens, the
//! authenticated dashboard for recorded readings, application state,
//! network types, and the REST helpers that talk to the backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log reporting and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
