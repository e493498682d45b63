//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of form state so chrome
//! controls can evolve independently of the signup flow.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for app-level chrome, provided as context from the root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}
