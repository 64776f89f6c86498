//! Stocksight web client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The same crate is compiled twice: with `ssr` it is linked into the server
//! and renders HTML, with `hydrate` it is built to WASM and takes over the
//! server-rendered markup in the browser.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

/// Browser entry point invoked by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed, e.g. on a repeated hydrate.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
