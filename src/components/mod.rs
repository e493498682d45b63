//! UI building blocks shared by the routed pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component is presentational; anything stateful arrives either as a
//! signal prop or through the context provided by the app root.

pub mod button;
pub mod content_panel;
pub mod header;
pub mod password_checklist;
pub mod sidebar;
