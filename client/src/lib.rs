//! # client
//!
//! Leptos frontend for the campus litter-monitoring dashboard.
//!
//! The penalty ledger itself lives in the `ledger` crate; this crate owns the
//! page, its components, and the browser-only glue (theme persistence, the
//! hero carousel timer, the upload demo canvas, and scroll reveals).

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
