//! CLI command definitions.

pub mod auth;
pub mod health;
pub mod parameters;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the sysparam API.
#[derive(Debug, Parser)]
#[command(name = "sysparam-client")]
#[command(about = "CLI client for the sysparam maker-checker API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "SYSPARAM_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Acting maker or checker, sent as `x-user-id`.
    #[arg(long, short, env = "SYSPARAM_USER")]
    pub user: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Mock login and code verification.
    Auth(auth::AuthCommand),
    /// System parameter maker-checker workflow.
    #[command(alias = "params")]
    Parameters(parameters::ParametersCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}
