//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Courier - relay direct-message reports from authorized members to a staff channel
#[derive(Parser, Debug)]
#[command(name = "courier")]
#[command(about = "Relay direct-message reports from authorized members to a staff channel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the relay configuration file
    #[arg(short, long, global = true, default_value = "courier.toml")]
    pub config: PathBuf,

    /// Bot token, overriding the one in the configuration file
    #[arg(long, global = true, env = "DISCORD_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Connect to Discord and relay reports until interrupted
    Run,

    /// Validate the configuration and print it with the token redacted
    Check,
}
