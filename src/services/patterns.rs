//! Pattern library: the loose extraction regex per data kind and the
//! configurable rule tables behind them.
//!
//! Fixed-shape patterns are compiled once into `Lazy` statics. The
//! currency patterns depend on the active marker tables, so they are
//! compiled per `PatternLibrary` at startup. Extraction patterns are
//! deliberately permissive: false positives are expected and filtered
//! by validation.

use crate::domain::models::{DataKind, IssuerRule, RuleTables};
use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_WITH_AT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").expect("email pattern"));

static EMAIL_BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[\w.-]+\.[\w.-]+\b").expect("bare email pattern"));

static TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,2}:\d{2}(?:\s*[AaPp][Mm])?\b").expect("time pattern"));

static CARD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\d{4}[-\s]?){3}\d{4}|\d{13,16}").expect("card pattern"));

// A leading \b cannot assert between a space and '(', so the boundary
// sits inside the alternation: parenthesized area codes are
// self-delimiting, bare digit groups still require a word edge.
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\b\+?\d{1,3}[\s.-]?)?(?:\(\d{3}\)|\b\d{3})[\s.-]?\d{3}[\s.-]?\d{4}\b")
        .expect("phone pattern")
});

/// Compiled patterns plus the rule tables they were built from.
/// Immutable after construction; one per process run.
pub struct PatternLibrary {
    rules: RuleTables,
    currency_extract: Regex,
    currency_prefix: Regex,
    currency_suffix: Regex,
    currency_marker: Regex,
}

impl PatternLibrary {
    pub fn new(rules: RuleTables) -> anyhow::Result<Self> {
        let symbols: Vec<&str> = rules.currency.symbols.iter().map(String::as_str).collect();
        let codes: Vec<&str> = rules.currency.codes.iter().map(String::as_str).collect();
        let markers: Vec<&str> = symbols.iter().chain(codes.iter()).copied().collect();

        let marker_alt = alternation(&markers);
        let code_alt = alternation(&codes);

        let currency_extract = Regex::new(&format!(
            r"(?i)(?:{marker_alt})\s*\d{{1,3}}(?:,\d{{3}})*(?:\.\d{{2}})?|\d{{1,3}}(?:,\d{{3}})*(?:\.\d{{2}})?\s*(?:{code_alt})"
        ))
        .context("compile currency extraction pattern")?;
        let currency_prefix = Regex::new(&format!(r"(?i)^\s*(?:{marker_alt})"))
            .context("compile currency prefix pattern")?;
        // Symbols never mark a suffix; only 3-letter codes do.
        let currency_suffix = Regex::new(&format!(r"(?i)(?:{code_alt})\s*$"))
            .context("compile currency suffix pattern")?;
        let currency_marker = Regex::new(&format!(r"(?i)(?:{marker_alt})"))
            .context("compile currency marker pattern")?;

        Ok(Self {
            rules,
            currency_extract,
            currency_prefix,
            currency_suffix,
            currency_marker,
        })
    }

    pub fn rules(&self) -> &RuleTables {
        &self.rules
    }

    pub fn issuer_rules(&self) -> &[IssuerRule] {
        &self.rules.issuers
    }

    /// The loose nomination pattern(s) for one kind. Email has two
    /// passes; everything else has one.
    pub fn extraction_patterns(&self, kind: DataKind) -> Vec<&Regex> {
        match kind {
            DataKind::Email => vec![&EMAIL_WITH_AT, &EMAIL_BARE],
            DataKind::Time => vec![&TIME],
            DataKind::CreditCard => vec![&CARD],
            DataKind::Currency => vec![&self.currency_extract],
            DataKind::Phone => vec![&PHONE],
        }
    }

    pub fn currency_prefix(&self) -> &Regex {
        &self.currency_prefix
    }

    pub fn currency_suffix(&self) -> &Regex {
        &self.currency_suffix
    }

    pub fn currency_marker(&self) -> &Regex {
        &self.currency_marker
    }
}

/// Loads rule tables from a TOML file, or the built-in defaults when no
/// path is given. A named-but-unreadable file is a hard failure.
pub fn load_rules(path: Option<&str>) -> anyhow::Result<RuleTables> {
    let Some(path) = path else {
        return Ok(RuleTables::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read rules file '{path}'"))?;
    toml::from_str(&raw).with_context(|| format!("malformed rules file '{path}'"))
}

/// One-line description of the loose pattern, for `kinds` output.
pub fn kind_summary(kind: DataKind) -> &'static str {
    match kind {
        DataKind::Email => "token@token.token runs, plus bare token.token runs missing the @",
        DataKind::Time => "H:MM with an optional case-insensitive AM/PM suffix",
        DataKind::CreditCard => "four groups of 4 digits, or a bare run of 13-16 digits",
        DataKind::Currency => "amount marked by a currency symbol or 3-letter code",
        DataKind::Phone => "10-digit North-American number with optional country code",
    }
}

// An empty table must never match anything; an empty alternation would
// match everywhere instead.
fn alternation(items: &[&str]) -> String {
    if items.is_empty() {
        return r"[^\s\S]".to_string();
    }
    items
        .iter()
        .map(|item| regex::escape(item))
        .collect::<Vec<_>>()
        .join("|")
}
