//! # client
//!
//! Leptos CSR front end for the session layer in the `auth` crate.
//!
//! The browser owns three seams of the core: `localStorage` persistence
//! (`util::storage`), the `gloo-net` transport (`net::api`), and router-driven
//! navigation (`util::auth`). Pages only talk to the shared session handle.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entrypoint: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
