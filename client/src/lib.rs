//! # client
//!
//! Leptos + WASM frontend for the personal finance tracker.
//!
//! This crate contains the route-level auth gate, pages, components, finance
//! state, and REST helpers for the backend API. It is compiled twice: with
//! `hydrate` for the browser bundle and with `ssr` as a library linked into
//! the `fintrack` server, which renders the shell.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell in the browser.
///
/// The interactive auth client is chosen here, once, and handed to `App`.
/// The SSR shell passes the inert client instead.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let auth = auth::AuthClientHandle::interactive();
    leptos::mount::hydrate_body(move || view! { <app::App auth=auth/> });
}
