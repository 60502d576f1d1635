//! # client
//!
//! Leptos + WASM dashboard for the outreach backend: workspace and prospect
//! forms, copy generation, the campaign builder and list, and demo analytics
//! events.
//!
//! The backend is external. Everything here is presentational state plus
//! one HTTP request per user action (see `net::api`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
