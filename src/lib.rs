//! # academico-client
//!
//! Leptos + WASM frontend for the academic-management dashboard.
//!
//! The correctness-critical slice of this crate is the session layer
//! (`state`) and the role-gated routing (`guard`, `routes`): everything a
//! page renders flows from the single [`state::store::SessionStore`], and
//! every navigation passes through the access guard before a view mounts.
//! Pages themselves are thin consumers of that state; the heavy lifting
//! (grading, attendance, performance prediction) lives in the backend API.

pub mod app;
pub mod components;
pub mod guard;
pub mod net;
pub mod notify;
pub mod pages;
pub mod routes;
pub mod state;
pub mod storage;

/// WASM entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
