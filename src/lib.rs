//! # opennionated
//!
//! Leptos + WASM frontend for the Opennionated student-article platform.
//!
//! All persistence, approval workflow, and authentication live in the external
//! backend API. This crate owns the client-side session (token, cached user,
//! author capability), the route guard that protects authenticated and
//! author-only views, and the pages that drive those flows.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
