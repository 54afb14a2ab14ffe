//! CLI interface for cuotas
//!
//! Provides subcommands for:
//! - `quote`: Price a loan from flags or a form file
//! - `payload`: Build the loan-creation payload from a form file
//! - `rate`: Show the interest percentage for a cadence
//! - `config`: Show the effective configuration

mod payload;
mod quote;
mod rate;

pub use payload::PayloadArgs;
pub use quote::{format_table, QuoteArgs};
pub use rate::RateArgs;

use crate::pricing::{CallerRole, LoanForm};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::Path;

#[derive(Parser, Debug)]
#[command(name = "cuotas")]
#[command(about = "Loan quote calculator for créditos")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price a loan
    Quote(QuoteArgs),
    /// Build the loan-creation payload
    Payload(PayloadArgs),
    /// Show the interest percentage for a cadence and installment count
    Rate(RateArgs),
    /// Show configuration
    Config,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Caller role from an optional `--role` flag
pub(crate) fn caller_role(role: Option<u32>) -> CallerRole {
    role.map(CallerRole::id).unwrap_or_else(CallerRole::anonymous)
}

/// Read a JSON loan form from disk
pub(crate) fn load_form(path: &Path) -> anyhow::Result<LoanForm> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read form {}", path.display()))?;
    let form = serde_json::from_str(&content)
        .with_context(|| format!("Invalid form JSON in {}", path.display()))?;
    Ok(form)
}
