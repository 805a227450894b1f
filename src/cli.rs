use crate::domain::models::DataKind;
use clap::{Parser, Subcommand};

pub const DEFAULT_INPUT_PATH: &str = "api_response.txt";

#[derive(Parser, Debug)]
#[command(name = "skimmer", version, about = "Structured-data scanner for captured text")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_INPUT_PATH,
        help = "Path to the captured text to scan"
    )]
    pub input: String,
    #[arg(
        long,
        global = true,
        help = "TOML rules file overriding the built-in issuer/currency tables"
    )]
    pub rules: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the input for one kind, or all five.
    Scan {
        #[arg(long, value_enum)]
        kind: Option<DataKind>,
    },
    /// Validate a single candidate directly, bypassing extraction.
    Check {
        #[arg(value_enum)]
        kind: DataKind,
        candidate: String,
    },
    /// List the supported data kinds and their loose patterns.
    Kinds,
    /// Show the active rule tables.
    Rules,
}
