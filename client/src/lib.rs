//! # client
//!
//! Leptos + WASM frontend for the CoffeePaws pet-friendly cafe finder.
//!
//! This crate contains the fixed shop catalog, the filter logic that derives
//! the visible shop list, the self-updating hero widgets, and the page shell.
//! It is compiled with `ssr` for server rendering inside the Axum binary and
//! with `hydrate` for the browser bundle.

pub mod app;
pub mod catalog;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attaches the reactive app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::{App, base_from_document};

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let base = base_from_document();
    log::debug!("hydrating coffeepaws client: base={base:?}");
    leptos::mount::hydrate_body(move || view! { <App base/> });
}
