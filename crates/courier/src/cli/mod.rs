//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the courier binary.

mod check;
mod commands;
mod run;

pub use check::{check_config, load_config};
pub use commands::{Cli, Commands};
pub use run::run_bot;
