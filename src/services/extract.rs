//! Candidate nomination.
//!
//! Loose pattern matching over the raw text, then the per-kind
//! post-filters that keep obvious non-candidates away from validation:
//! the email no-`@` pass drops version-number lookalikes, and the phone
//! pass drops card-shaped digit runs. Candidates are trimmed and
//! deduplicated in first-seen order.

use crate::domain::models::DataKind;
use crate::services::patterns::PatternLibrary;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static PURELY_NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d.]+$").expect("numeric filter pattern"));

const CARD_SHAPED_DIGITS: usize = 16;

/// Nominates candidates for one kind. Returns an empty vector when
/// nothing matches; never errors.
pub fn extract(lib: &PatternLibrary, text: &str, kind: DataKind) -> Vec<String> {
    match kind {
        DataKind::Email => extract_email(lib, text),
        DataKind::Phone => {
            let mut candidates = collect(lib, text, kind);
            candidates.retain(|c| !card_shaped(c));
            candidates
        }
        _ => collect(lib, text, kind),
    }
}

/// Sixteen digits in the raw candidate means a card match strayed into
/// the phone scan; such candidates are dropped before validation ever
/// sees them. Counted before any country-code stripping.
pub fn card_shaped(candidate: &str) -> bool {
    candidate.chars().filter(char::is_ascii_digit).count() == CARD_SHAPED_DIGITS
}

fn collect(lib: &PatternLibrary, text: &str, kind: DataKind) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for pattern in lib.extraction_patterns(kind) {
        for m in pattern.find_iter(text) {
            push_unique(&mut seen, &mut out, m.as_str());
        }
    }
    out
}

// Two passes merged deterministically: @-bearing candidates first, then
// surviving bare candidates, each in first-seen order.
fn extract_email(lib: &PatternLibrary, text: &str) -> Vec<String> {
    let patterns = lib.extraction_patterns(DataKind::Email);
    let (with_at, bare) = (patterns[0], patterns[1]);

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for m in with_at.find_iter(text) {
        push_unique(&mut seen, &mut out, m.as_str());
    }
    for m in bare.find_iter(text) {
        let candidate = m.as_str().trim();
        if PURELY_NUMERIC.is_match(candidate) {
            continue;
        }
        if !leading_segment_has_letter(candidate) {
            continue;
        }
        push_unique(&mut seen, &mut out, candidate);
    }
    out
}

// Suppresses numeric IDs like "2024.01": the part before the first dot
// must carry at least one letter.
fn leading_segment_has_letter(candidate: &str) -> bool {
    candidate
        .split('.')
        .next()
        .is_some_and(|segment| segment.chars().any(|c| c.is_ascii_alphabetic()))
}

fn push_unique(seen: &mut HashSet<String>, out: &mut Vec<String>, raw: &str) {
    let candidate = raw.trim();
    if candidate.is_empty() {
        return;
    }
    if seen.insert(candidate.to_string()) {
        out.push(candidate.to_string());
    }
}
