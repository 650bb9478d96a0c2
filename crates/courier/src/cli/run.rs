//! The `run` command.

use courier_core::{RelayConfig, log_source};
use courier_discord::CourierBot;
use std::sync::Arc;
use tracing::{info, warn};

/// Run the bot until the gateway client stops or Ctrl+C is received.
///
/// # Errors
///
/// Returns an error if the client cannot be built or stops with a fatal error.
pub async fn run_bot(config: RelayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(config);
    info!(
        source = log_source::COMMAND,
        community = %config.community_id(),
        destination = %config.destination_channel_id(),
        "Starting relay"
    );

    let mut bot = CourierBot::new(config).await?;

    let shard_manager = bot.shard_manager();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!(source = log_source::COMMAND, "Received Ctrl+C, shutting down"),
            Err(e) => warn!(error = %e, "Failed to listen for Ctrl+C, shutting down"),
        }
        shard_manager.shutdown_all().await;
    });

    bot.start().await?;

    info!(source = log_source::COMMAND, "Relay stopped");
    Ok(())
}
