use crate::domain::constants;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The data types the scanner knows how to nominate and validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DataKind {
    Email,
    Time,
    CreditCard,
    Currency,
    Phone,
}

impl DataKind {
    /// Scan order for full runs.
    pub const ALL: [DataKind; 5] = [
        DataKind::Email,
        DataKind::Time,
        DataKind::CreditCard,
        DataKind::Currency,
        DataKind::Phone,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DataKind::Email => "email",
            DataKind::Time => "time",
            DataKind::CreditCard => "credit-card",
            DataKind::Currency => "currency",
            DataKind::Phone => "phone",
        }
    }
}

/// Rejection reasons. The rendered strings are a stable vocabulary for
/// consumers that parse report lines; change them only together with
/// the contract tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    MissingOrMultipleAt,
    IllegalUsernameChars,
    DomainMissingDot,
    IllegalDomainLabel { label: String },
    InvalidTopLevelDomain { tld: String },
    TimePatternMismatch,
    MinuteOutOfRange,
    HourOutOfRange12,
    HourOutOfRange24,
    CardNonDigit,
    CardLengthOutOfRange,
    CardRepeatedDigits,
    MissingCurrencyMarker,
    BadDecimalDigits,
    NonDigitInteger,
    BadCommaGrouping,
    WrongPhoneDigitCount,
    MalformedAreaCodeParens,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::MissingOrMultipleAt => write!(f, "Missing or multiple @ symbols"),
            Reason::IllegalUsernameChars => {
                write!(f, "Username contains illegal characters or spaces")
            }
            Reason::DomainMissingDot => write!(f, "Domain missing '.'"),
            Reason::IllegalDomainLabel { label } => {
                write!(f, "Domain name part '{label}' contains illegal characters")
            }
            Reason::InvalidTopLevelDomain { tld } => {
                write!(f, "Top-level domain '{tld}' is invalid")
            }
            Reason::TimePatternMismatch => {
                write!(f, "Doesn't match H:MM or H:MM AM/PM pattern")
            }
            Reason::MinuteOutOfRange => write!(f, "Minute out of range (0-59)"),
            Reason::HourOutOfRange12 => {
                write!(f, "Hour out of range for 12-hour format (1-12)")
            }
            Reason::HourOutOfRange24 => {
                write!(f, "Hour out of range for 24-hour format (0-23)")
            }
            Reason::CardNonDigit => write!(f, "Contains nondigit characters"),
            Reason::CardLengthOutOfRange => write!(f, "Must be 13-16 digits long"),
            Reason::CardRepeatedDigits => {
                write!(f, "Repeated digit sequence (unlikely to be real card)")
            }
            Reason::MissingCurrencyMarker => write!(f, "Missing currency marker"),
            Reason::BadDecimalDigits => {
                write!(f, "Decimal part must have exactly 2 digits")
            }
            Reason::NonDigitInteger => {
                write!(f, "Contains non-digit characters in integer part")
            }
            Reason::BadCommaGrouping => {
                write!(f, "Incorrect comma placement in thousands")
            }
            Reason::WrongPhoneDigitCount => {
                write!(f, "Must have exactly 10 digits (excluding country code)")
            }
            Reason::MalformedAreaCodeParens => write!(f, "Area code parentheses incorrect"),
        }
    }
}

/// Outcome of validating one candidate. `detail` carries the normalized
/// form or issuer tag for valid results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid { detail: String },
    Invalid { reason: Reason },
}

impl Verdict {
    pub fn valid(detail: impl Into<String>) -> Self {
        Verdict::Valid {
            detail: detail.into(),
        }
    }

    pub fn invalid(reason: Reason) -> Self {
        Verdict::Invalid { reason }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid { .. })
    }

    /// The consumer-facing line fragment after `<candidate>: `.
    pub fn render(&self) -> String {
        match self {
            Verdict::Valid { detail } => format!("Valid {detail}"),
            Verdict::Invalid { reason } => format!("Invalid: {reason}"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub candidate: String,
    pub valid: bool,
    pub verdict: String,
}

#[derive(Debug, Serialize)]
pub struct KindReport {
    pub kind: DataKind,
    pub findings: Vec<Finding>,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub kind: DataKind,
    pub candidate: String,
    pub valid: bool,
    pub verdict: String,
}

#[derive(Debug, Serialize)]
pub struct KindInfo {
    pub kind: DataKind,
    pub summary: String,
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Numeric prefix window an issuer rule accepts: the first `digits`
/// digits of the cleaned card, read as an integer, must fall in
/// `[lo, hi]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefixRange {
    pub digits: usize,
    pub lo: u32,
    pub hi: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuerRule {
    pub name: String,
    pub prefixes: Vec<PrefixRange>,
    pub lengths: Vec<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyMarkers {
    #[serde(default = "constants::default_currency_symbols")]
    pub symbols: Vec<String>,
    #[serde(default = "constants::default_currency_codes")]
    pub codes: Vec<String>,
}

impl Default for CurrencyMarkers {
    fn default() -> Self {
        Self {
            symbols: constants::default_currency_symbols(),
            codes: constants::default_currency_codes(),
        }
    }
}

/// The configurable accept/reject tables. A rules file replaces the
/// tables it names; everything else keeps the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTables {
    #[serde(default)]
    pub currency: CurrencyMarkers,
    #[serde(default = "constants::default_issuer_rules")]
    pub issuers: Vec<IssuerRule>,
}

impl Default for RuleTables {
    fn default() -> Self {
        Self {
            currency: CurrencyMarkers::default(),
            issuers: constants::default_issuer_rules(),
        }
    }
}
