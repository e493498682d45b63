//! # onboard
//!
//! Leptos + WASM signup and dashboard frontend. The crate is a pure
//! client-side app: every interaction is local state, nothing talks to a
//! backend yet.
//!
//! Validation and form-state logic live in plain structs and functions so
//! `cargo test` exercises them natively without a browser.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
