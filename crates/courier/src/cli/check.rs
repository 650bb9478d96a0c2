//! Configuration loading and the `check` command.

use super::Cli;
use courier_core::{RelayConfig, log_source};
use courier_error::CourierResult;
use tracing::info;

/// Load the configuration named on the command line.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not parse, or is invalid.
pub fn load_config(cli: &Cli) -> CourierResult<RelayConfig> {
    let config = RelayConfig::from_file(&cli.config, cli.token.clone())?;
    info!(
        source = log_source::COMMAND,
        path = %cli.config.display(),
        "Configuration loaded"
    );
    Ok(config)
}

/// Human-readable summary of a validated configuration.
///
/// The token is never included.
pub fn check_config(config: &RelayConfig) -> String {
    format!(
        "Configuration OK\n  community:           {}\n  destination channel: {}\n  authorized role:     {}\n  max message length:  {}",
        config.community_id(),
        config.destination_channel_id(),
        config.authorized_role_id(),
        config.max_message_length()
    )
}
