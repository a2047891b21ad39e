//! # draftdeck-client
//!
//! Leptos + WASM frontend for the DraftDeck AI document generator.
//! Lets an authenticated user request generated slide decks (`.pptx`) and
//! text documents (`.docx`), download the rendered files, and browse a
//! per-user project history.
//!
//! This crate contains pages, components, application state, the auth and
//! API clients, and the client-side session store. Content generation and
//! file rendering live in the backend and are consumed over HTTP only.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
