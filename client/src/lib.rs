//! # client
//!
//! Leptos + WASM frontend for the Dhek board and notepad.
//!
//! Pages bind to a per-page [`dhek::UrlStore`] through `state::store`, which
//! mirrors store writes into reactive signals. Browser seams (history,
//! clipboard, theme) live in `util` and compile to no-ops without the
//! `hydrate` feature so server rendering stays deterministic.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
