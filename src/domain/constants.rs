//! Built-in rule tables.
//!
//! These are the defaults behind the `--rules` file: currency markers
//! and issuer heuristics live here so they can be extended without
//! touching the pipeline shape.

use crate::domain::models::{IssuerRule, PrefixRange};

pub fn default_currency_symbols() -> Vec<String> {
    ["$", "£", "€"].map(String::from).to_vec()
}

pub fn default_currency_codes() -> Vec<String> {
    ["RWF", "UGX", "USD", "EUR", "GBP", "KSH", "KES"]
        .map(String::from)
        .to_vec()
}

/// Issuer heuristics, evaluated in order; first match wins. Prefix
/// ranges approximate network ownership without any checksum.
pub fn default_issuer_rules() -> Vec<IssuerRule> {
    vec![
        IssuerRule {
            name: "Visa".to_string(),
            prefixes: vec![PrefixRange {
                digits: 1,
                lo: 4,
                hi: 4,
            }],
            lengths: vec![13, 16],
        },
        IssuerRule {
            name: "American Express".to_string(),
            prefixes: vec![
                PrefixRange {
                    digits: 2,
                    lo: 34,
                    hi: 34,
                },
                PrefixRange {
                    digits: 2,
                    lo: 37,
                    hi: 37,
                },
            ],
            lengths: vec![15],
        },
        IssuerRule {
            name: "MasterCard".to_string(),
            prefixes: vec![
                PrefixRange {
                    digits: 2,
                    lo: 51,
                    hi: 55,
                },
                PrefixRange {
                    digits: 4,
                    lo: 2221,
                    hi: 2720,
                },
            ],
            lengths: vec![16],
        },
        IssuerRule {
            name: "Discover".to_string(),
            prefixes: vec![
                PrefixRange {
                    digits: 4,
                    lo: 6011,
                    hi: 6011,
                },
                PrefixRange {
                    digits: 2,
                    lo: 65,
                    hi: 65,
                },
                PrefixRange {
                    digits: 3,
                    lo: 644,
                    hi: 649,
                },
            ],
            lengths: vec![16],
        },
    ]
}
