//! # client
//!
//! Leptos + WASM frontend for the portal.
//!
//! This crate contains the route declarations, the `RouteGuard` wrapper that
//! applies the `guard` crate's navigation guard to every page, the pages
//! themselves, the auth-backend session source and the design-token
//! stylesheet.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod theme;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(app::App);
}
