//! # tracker-client
//!
//! Leptos + WASM client for the Tracker app. Owns the reactive
//! authentication session: sign-in/sign-out against persisted credentials,
//! and a one-shot startup restore of any previously saved token.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod storage;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::hydrate_body(App);
}
