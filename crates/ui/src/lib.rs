//! Browser frontend for the items API (Leptos, client-side rendered).
//!
//! View logic that doesn't touch the DOM lives in [`logic`] and compiles on
//! every target so it runs under host-side unit tests; the components and
//! fetch bindings are WASM-only.

pub mod logic;

#[cfg(target_arch = "wasm32")]
pub mod api;
#[cfg(target_arch = "wasm32")]
pub mod app;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point, called automatically when the module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    leptos::mount_to_body(app::App);
}
