//! Cross-cutting helpers: pure validation rules and browser glue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and components stay free of direct `web_sys` calls; anything that
//! touches the browser environment lives here behind the `csr` feature.

pub mod dark_mode;
pub mod validation;
