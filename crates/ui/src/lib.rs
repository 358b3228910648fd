//! `stocktable-ui`
//!
//! **Responsibility:** browser presentation shell for the inventory widget.
//!
//! The canonical state and all transition rules live in
//! `stocktable-inventory`; this crate is a **thin shell** that renders the
//! derived view and forwards user input back in as commands. It owns exactly
//! one piece of deferred work: the notification auto-clear timer.

#[cfg(target_arch = "wasm32")]
pub mod app;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point for the widget.
/// Called automatically when the WASM module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    // Readable panics in the browser console.
    console_error_panic_hook::set_once();

    leptos::mount_to_body(app::App);
}
