//! Auth CLI commands.

use clap::{Parser, Subcommand};

/// Mock authentication commands.
#[derive(Debug, Parser)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub action: AuthAction,
}

/// Available auth actions.
#[derive(Debug, Subcommand)]
pub enum AuthAction {
    /// Log in with username and password.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "SYSPARAM_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Verify a one-time code.
    Verify {
        /// The code received.
        code: String,
        /// Delivery channel, e.g. "sms" or "email".
        #[arg(long, default_value = "sms")]
        mode: String,
    },
}
