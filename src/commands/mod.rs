//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `scan.rs` — the scan/check pipeline commands.
//! - `info.rs` — kinds/rules introspection commands.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod info;
pub mod scan;

pub use info::handle_info_commands;
pub use scan::handle_scan_commands;
