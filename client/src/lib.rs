//! # client
//!
//! Leptos frontend for the SchoolSync landing page.
//!
//! This crate contains the role registry, the feature list, the presentational
//! components built from them, and the application shell. The same code
//! renders on the server (`ssr`) and hydrates in the browser (`hydrate`).

pub mod app;
pub mod components;
pub mod features;
pub mod pages;
pub mod roles;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating {}", pages::home::BRAND);
    leptos::mount::hydrate_body(app::App);
}
