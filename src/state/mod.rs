//! Plain state models behind the reactive layer.
//!
//! DESIGN
//! ======
//! Per-domain structs (`signup`, `ui`) carry no signal types of their own,
//! which keeps every transition runnable under native `cargo test`.

pub mod signup;
pub mod ui;
