//! # campus-pulse
//!
//! Leptos + WASM frontend for the Campus Pulse student analytics dashboard.
//!
//! The crate is split into the session/authorization core (`state::auth`,
//! `state::callback`, `state::guard`, `net::api`) and the per-view data
//! orchestration (`state::dashboard`, `state::students`,
//! `state::student_detail`, `state::courses`). Pages and components render
//! whatever those layers hand them; chart fidelity and styling live in CSS
//! and are not this crate's concern.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
