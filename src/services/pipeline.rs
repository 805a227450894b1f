//! Extractor → Validator composition.

use crate::domain::models::{DataKind, Finding, KindReport};
use crate::services::patterns::PatternLibrary;
use crate::services::{extract, validate};

/// Runs the two-stage scan for one kind. Stateless and rerunnable: the
/// same text and rule tables always produce the same findings.
pub fn run(lib: &PatternLibrary, text: &str, kind: DataKind) -> Vec<Finding> {
    extract::extract(lib, text, kind)
        .into_iter()
        .map(|candidate| {
            let verdict = validate::validate(lib, kind, &candidate);
            Finding {
                candidate,
                valid: verdict.is_valid(),
                verdict: verdict.render(),
            }
        })
        .collect()
}

/// Runs all five kinds over one input, in fixed scan order.
pub fn run_all(lib: &PatternLibrary, text: &str) -> Vec<KindReport> {
    DataKind::ALL
        .iter()
        .map(|&kind| KindReport {
            kind,
            findings: run(lib, text, kind),
        })
        .collect()
}
