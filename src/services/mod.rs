//! Service layer containing the scan pipeline stages.
//!
//! ## Service map
//! - `patterns.rs` — pattern library: loose extraction regexes plus the
//!   table-driven currency/issuer rules.
//! - `extract.rs` — candidate nomination, dedup, per-kind post-filters.
//! - `validate.rs` — strict rule chains producing verdicts.
//! - `pipeline.rs` — extractor → validator composition.
//! - `input.rs` — input text boundary.
//! - `report.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod extract;
pub mod input;
pub mod patterns;
pub mod pipeline;
pub mod report;
pub mod validate;
