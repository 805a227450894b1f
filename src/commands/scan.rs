use crate::cli::{Cli, Commands};
use crate::domain::models::{CheckReport, JsonOut, KindReport};
use crate::services::patterns::PatternLibrary;
use crate::services::{input, pipeline, report, validate};

pub fn handle_scan_commands(cli: &Cli, lib: &PatternLibrary) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Scan { kind } => {
            let text = input::load_text(&cli.input)?;
            let reports: Vec<KindReport> = match kind {
                Some(kind) => vec![KindReport {
                    kind: *kind,
                    findings: pipeline::run(lib, &text, *kind),
                }],
                None => pipeline::run_all(lib, &text),
            };
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: reports
                    })?
                );
            } else {
                for r in &reports {
                    println!();
                    println!("{}", report::section_title(r.kind));
                    for finding in &r.findings {
                        println!("{}", report::finding_line(finding));
                    }
                }
            }
        }
        Commands::Check { kind, candidate } => {
            let verdict = validate::validate(lib, *kind, candidate);
            let out = CheckReport {
                kind: *kind,
                candidate: candidate.clone(),
                valid: verdict.is_valid(),
                verdict: verdict.render(),
            };
            report::print_one(cli.json, out, |c| format!("{}: {}", c.candidate, c.verdict))?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}
