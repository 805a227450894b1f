//! The rendered verdict strings are a closed vocabulary that consumers
//! parse. This suite pins every reason and every valid-detail shape
//! through the real binary.

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;

fn check_json(kind: &str, candidate: &str) -> Value {
    let mut cmd = cargo_bin_cmd!("skimmer");
    let out = cmd
        .args(["--json", "check", kind, candidate])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("valid json output")
}

fn verdict_of(kind: &str, candidate: &str) -> String {
    let out = check_json(kind, candidate);
    assert_eq!(out["ok"], true);
    out["data"]["verdict"]
        .as_str()
        .expect("verdict string")
        .to_string()
}

#[test]
fn email_vocabulary() {
    assert_eq!(verdict_of("email", "jane@example.com"), "Valid email");
    assert_eq!(
        verdict_of("email", "jane.doe"),
        "Invalid: Missing or multiple @ symbols"
    );
    assert_eq!(
        verdict_of("email", "ja ne@example.com"),
        "Invalid: Username contains illegal characters or spaces"
    );
    assert_eq!(
        verdict_of("email", "jane@example"),
        "Invalid: Domain missing '.'"
    );
    assert_eq!(
        verdict_of("email", "jane@bad!label.com"),
        "Invalid: Domain name part 'bad!label' contains illegal characters"
    );
    assert_eq!(
        verdict_of("email", "jane@example.c"),
        "Invalid: Top-level domain 'c' is invalid"
    );
}

#[test]
fn time_vocabulary() {
    assert_eq!(
        verdict_of("time", "9:05"),
        "Valid 24-hour time (normalized: 09:05)"
    );
    assert_eq!(
        verdict_of("time", "2:30 pm"),
        "Valid 12-hour time (normalized: 02:30 PM)"
    );
    assert_eq!(
        verdict_of("time", "half past"),
        "Invalid: Doesn't match H:MM or H:MM AM/PM pattern"
    );
    assert_eq!(verdict_of("time", "9:61"), "Invalid: Minute out of range (0-59)");
    assert_eq!(
        verdict_of("time", "13:00 PM"),
        "Invalid: Hour out of range for 12-hour format (1-12)"
    );
    assert_eq!(
        verdict_of("time", "25:00"),
        "Invalid: Hour out of range for 24-hour format (0-23)"
    );
}

#[test]
fn credit_card_vocabulary() {
    assert_eq!(
        verdict_of("credit-card", "4111 1111 1111 1111"),
        "Valid credit card number (Issuer: Visa)"
    );
    assert_eq!(
        verdict_of("credit-card", "9999888877776666"),
        "Valid credit card number (Issuer: Unknown but plausible)"
    );
    assert_eq!(
        verdict_of("credit-card", "4111x1111"),
        "Invalid: Contains nondigit characters"
    );
    assert_eq!(
        verdict_of("credit-card", "411111111111"),
        "Invalid: Must be 13-16 digits long"
    );
    assert_eq!(
        verdict_of("credit-card", "1111111111111111"),
        "Invalid: Repeated digit sequence (unlikely to be real card)"
    );
}

#[test]
fn currency_vocabulary() {
    assert_eq!(verdict_of("currency", "$1,234.56"), "Valid currency amount");
    assert_eq!(
        verdict_of("currency", "1,234.56"),
        "Invalid: Missing currency marker"
    );
    assert_eq!(
        verdict_of("currency", "$1.5"),
        "Invalid: Decimal part must have exactly 2 digits"
    );
    assert_eq!(
        verdict_of("currency", "$1x2"),
        "Invalid: Contains non-digit characters in integer part"
    );
    assert_eq!(
        verdict_of("currency", "$12,34.56"),
        "Invalid: Incorrect comma placement in thousands"
    );
}

#[test]
fn phone_vocabulary() {
    assert_eq!(verdict_of("phone", "(555) 123-4567"), "Valid phone number");
    assert_eq!(
        verdict_of("phone", "555-1234"),
        "Invalid: Must have exactly 10 digits (excluding country code)"
    );
    assert_eq!(
        verdict_of("phone", "(555 123-4567"),
        "Invalid: Area code parentheses incorrect"
    );
}
