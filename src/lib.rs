//! Brewdesk - Coffee Shop Back-Office
//!
//! Management dashboard for a coffee shop, built with Leptos and WebAssembly.
//! Sign-in, session persistence and route protection live in [`core::auth`].

#![recursion_limit = "256"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
