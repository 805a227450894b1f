//! Strict rule chains.
//!
//! One deterministic `&str -> Verdict` chain per data kind; the first
//! failing rule decides the reason. These are total functions over the
//! string domain: a malformed candidate is classified, never an error.

use crate::domain::models::{DataKind, IssuerRule, PrefixRange, Reason, Verdict};
use crate::services::patterns::PatternLibrary;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_LOCAL_PART: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.-]+$").expect("local part pattern"));

static EMAIL_DOMAIN_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w-]+$").expect("domain label pattern"));

static EMAIL_TLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]{2,}$").expect("tld pattern"));

static TIME_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})(?:\s*([AaPp][Mm]))?$").expect("time shape"));

static PHONE_PARENS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(\d{3}\)[\s.-]?\d{3}[\s.-]?\d{4}$").expect("parenthesized phone shape")
});

/// Applies the rule chain for `kind` to one candidate.
pub fn validate(lib: &PatternLibrary, kind: DataKind, candidate: &str) -> Verdict {
    match kind {
        DataKind::Email => validate_email(candidate),
        DataKind::Time => validate_time(candidate),
        DataKind::CreditCard => validate_card(lib.issuer_rules(), candidate),
        DataKind::Currency => validate_currency(lib, candidate),
        DataKind::Phone => validate_phone(candidate),
    }
}

fn validate_email(candidate: &str) -> Verdict {
    let (local, domain) = match candidate.split_once('@') {
        Some((local, domain)) if !domain.contains('@') => (local, domain),
        _ => return Verdict::invalid(Reason::MissingOrMultipleAt),
    };
    if !EMAIL_LOCAL_PART.is_match(local) {
        return Verdict::invalid(Reason::IllegalUsernameChars);
    }
    if !domain.contains('.') {
        return Verdict::invalid(Reason::DomainMissingDot);
    }
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, front)) = labels.split_last() else {
        return Verdict::invalid(Reason::DomainMissingDot);
    };
    for label in front {
        if !EMAIL_DOMAIN_LABEL.is_match(label) {
            return Verdict::invalid(Reason::IllegalDomainLabel {
                label: label.to_string(),
            });
        }
    }
    if !EMAIL_TLD.is_match(tld) {
        return Verdict::invalid(Reason::InvalidTopLevelDomain {
            tld: tld.to_string(),
        });
    }
    Verdict::valid("email")
}

fn validate_time(candidate: &str) -> Verdict {
    let Some(caps) = TIME_SHAPE.captures(candidate.trim()) else {
        return Verdict::invalid(Reason::TimePatternMismatch);
    };
    let (Ok(hour), Ok(minute)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>()) else {
        return Verdict::invalid(Reason::TimePatternMismatch);
    };
    if minute > 59 {
        return Verdict::invalid(Reason::MinuteOutOfRange);
    }
    match caps.get(3) {
        Some(suffix) => {
            // 12-hour clock; hour 0 is not a thing.
            if !(1..=12).contains(&hour) {
                return Verdict::invalid(Reason::HourOutOfRange12);
            }
            let suffix = suffix.as_str().to_uppercase();
            Verdict::valid(format!(
                "12-hour time (normalized: {hour:02}:{minute:02} {suffix})"
            ))
        }
        None => {
            if hour > 23 {
                return Verdict::invalid(Reason::HourOutOfRange24);
            }
            Verdict::valid(format!("24-hour time (normalized: {hour:02}:{minute:02})"))
        }
    }
}

fn validate_card(rules: &[IssuerRule], candidate: &str) -> Verdict {
    let cleaned: String = candidate
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return Verdict::invalid(Reason::CardNonDigit);
    }
    if !(13..=16).contains(&cleaned.len()) {
        return Verdict::invalid(Reason::CardLengthOutOfRange);
    }
    if is_repeated_sequence(&cleaned) {
        return Verdict::invalid(Reason::CardRepeatedDigits);
    }
    match detect_issuer(rules, &cleaned) {
        Some(issuer) => Verdict::valid(format!("credit card number (Issuer: {issuer})")),
        None => Verdict::valid("credit card number (Issuer: Unknown but plausible)"),
    }
}

/// Walks the issuer table in order; first rule whose length and any
/// prefix range both match wins. No checksum is involved.
pub fn detect_issuer<'a>(rules: &'a [IssuerRule], digits: &str) -> Option<&'a str> {
    rules
        .iter()
        .find(|rule| {
            rule.lengths.contains(&digits.len())
                && rule.prefixes.iter().any(|range| prefix_in_range(digits, range))
        })
        .map(|rule| rule.name.as_str())
}

fn prefix_in_range(digits: &str, range: &PrefixRange) -> bool {
    digits
        .get(..range.digits)
        .and_then(|prefix| prefix.parse::<u32>().ok())
        .is_some_and(|value| (range.lo..=range.hi).contains(&value))
}

fn is_repeated_sequence(digits: &str) -> bool {
    let mut chars = digits.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}

fn validate_currency(lib: &PatternLibrary, candidate: &str) -> Verdict {
    let s = candidate.trim();
    if !lib.currency_prefix().is_match(s) && !lib.currency_suffix().is_match(s) {
        return Verdict::invalid(Reason::MissingCurrencyMarker);
    }
    let numeric = lib.currency_marker().replace_all(s, "");
    let numeric = numeric.trim();

    let (int_part, dec_part) = match numeric.split_once('.') {
        Some((int_part, dec_part)) => (int_part, Some(dec_part)),
        None => (numeric, None),
    };
    if let Some(dec) = dec_part {
        if dec.len() != 2 || !dec.chars().all(|c| c.is_ascii_digit()) {
            return Verdict::invalid(Reason::BadDecimalDigits);
        }
    }
    let int_clean: String = int_part.chars().filter(|c| *c != ',').collect();
    if int_clean.is_empty() || !int_clean.chars().all(|c| c.is_ascii_digit()) {
        return Verdict::invalid(Reason::NonDigitInteger);
    }
    let groups: Vec<&str> = int_part.split(',').collect();
    if groups.len() > 1 {
        let first_ok = (1..=3).contains(&groups[0].len());
        let rest_ok = groups[1..].iter().all(|group| group.len() == 3);
        if !first_ok || !rest_ok {
            return Verdict::invalid(Reason::BadCommaGrouping);
        }
    }
    Verdict::valid("currency amount")
}

fn validate_phone(candidate: &str) -> Verdict {
    let digits: String = candidate.chars().filter(char::is_ascii_digit).collect();
    // Anything past ten digits is read as a country code.
    let national = if digits.len() > 10 {
        &digits[digits.len() - 10..]
    } else {
        digits.as_str()
    };
    if national.len() != 10 {
        return Verdict::invalid(Reason::WrongPhoneDigitCount);
    }
    if (candidate.contains('(') || candidate.contains(')'))
        && !PHONE_PARENS.is_match(candidate)
    {
        return Verdict::invalid(Reason::MalformedAreaCodeParens);
    }
    Verdict::valid("phone number")
}
