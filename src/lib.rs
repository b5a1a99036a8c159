//! # puzzle-client
//!
//! Leptos + WASM front end for the eight-puzzle solver service. The client
//! renders the board snapshots the backend hands out over `GET /start` and
//! `GET /next`; all puzzle intelligence (shuffling, solving, win detection)
//! stays server-side.
//!
//! This crate contains the page, the grid component, the shared game state,
//! and the HTTP snapshot fetchers.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point invoked by the hydration bootstrap script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
