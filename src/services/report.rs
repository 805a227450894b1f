use crate::domain::models::{DataKind, Finding, JsonOut};
use serde::Serialize;

pub fn section_title(kind: DataKind) -> &'static str {
    match kind {
        DataKind::Email => "Email Validation Results:",
        DataKind::Time => "Time Validation Results:",
        DataKind::CreditCard => "Credit Card Validation Results:",
        DataKind::Currency => "Currency Validation Results:",
        DataKind::Phone => "Phone Number Validation Results:",
    }
}

pub fn finding_line(finding: &Finding) -> String {
    format!("{}: {}", finding.candidate, finding.verdict)
}

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(json: bool, data: T, row: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}
