//! Discord bot client setup and lifecycle management.

use crate::{CourierHandler, DiscordError, DiscordErrorKind};
use courier_core::RelayConfig;
use courier_relay::MessageRouter;
use serenity::{Client, gateway::ShardManager};
use std::sync::Arc;
use tracing::{info, instrument};

/// The relay bot's gateway client.
///
/// # Example
/// ```no_run
/// use courier_core::RelayConfig;
/// use courier_discord::CourierBot;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Arc::new(RelayConfig::from_file("courier.toml", None)?);
///     let mut bot = CourierBot::new(config).await?;
///     bot.start().await?;
///     Ok(())
/// }
/// ```
pub struct CourierBot {
    client: Client,
}

impl CourierBot {
    /// Build the client and its event handler.
    ///
    /// # Errors
    ///
    /// Returns an error if the Serenity client fails to initialize.
    #[instrument(skip_all, fields(community = %config.community_id()))]
    pub async fn new(config: Arc<RelayConfig>) -> Result<Self, DiscordError> {
        info!("Initializing Courier Discord bot");

        let token = config.token().clone();
        let handler = CourierHandler::new(MessageRouter::new(config));
        let intents = CourierHandler::intents();
        info!("Building Serenity client with intents: {:?}", intents);

        let client = Client::builder(&token, intents)
            .event_handler(handler)
            .await
            .map_err(|e| {
                DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                    "Failed to build client: {}",
                    e
                )))
            })?;

        info!("Serenity client built successfully");
        Ok(Self { client })
    }

    /// Connect and process events until the client shuts down.
    ///
    /// # Errors
    ///
    /// Returns an error if the client fails to start or hits a fatal gateway
    /// error such as a rejected token.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> Result<(), DiscordError> {
        info!("Starting Discord bot");
        self.client.start().await.map_err(DiscordError::from)?;
        Ok(())
    }

    /// Handle for shutting the client down from another task.
    pub fn shard_manager(&self) -> Arc<ShardManager> {
        self.client.shard_manager.clone()
    }
}
