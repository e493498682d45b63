//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! A page owns the signals and event handlers for its route and leans on
//! `components` for everything visual it shares with other screens.

pub mod dashboard;
pub mod signup;
