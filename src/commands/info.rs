use crate::cli::{Cli, Commands};
use crate::domain::models::{DataKind, KindInfo};
use crate::services::patterns::{self, PatternLibrary};
use crate::services::report;

pub fn handle_info_commands(cli: &Cli, lib: &PatternLibrary) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Kinds => {
            let items: Vec<KindInfo> = DataKind::ALL
                .iter()
                .map(|&kind| KindInfo {
                    kind,
                    summary: patterns::kind_summary(kind).to_string(),
                })
                .collect();
            report::print_out(cli.json, &items, |k| {
                format!("{}\t{}", k.kind.label(), k.summary)
            })?;
        }
        Commands::Rules => {
            let tables = lib.rules().clone();
            report::print_one(cli.json, tables, |t| {
                let issuers: Vec<&str> = t.issuers.iter().map(|i| i.name.as_str()).collect();
                format!(
                    "issuers={} symbols={} codes={}",
                    issuers.join(","),
                    t.currency.symbols.join(","),
                    t.currency.codes.join(",")
                )
            })?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}
