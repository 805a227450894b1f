use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use services::patterns::{load_rules, PatternLibrary};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let rules = load_rules(cli.rules.as_deref())?;
    let lib = PatternLibrary::new(rules)?;

    if commands::handle_scan_commands(&cli, &lib)? {
        return Ok(());
    }
    if commands::handle_info_commands(&cli, &lib)? {
        return Ok(());
    }
    anyhow::bail!("unhandled command")
}
