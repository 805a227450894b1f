//! Input boundary.
//!
//! The scanner consumes one in-memory text blob. Acquiring it is the
//! only hard failure in the tool; everything downstream classifies
//! rather than errors.

use anyhow::Context;

pub fn load_text(path: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read input file '{path}'"))
}
