//! Discord event handler for Serenity.
//!
//! Feeds every gateway message into the relay router.

use crate::{SerenityPlatform, inbound_message};
use courier_core::{UserId, log_source};
use courier_relay::{MessageRouter, RouteOutcome};
use serenity::{
    all::{Context, EventHandler, GatewayIntents, GuildId, Message, Ready},
    async_trait,
};
use std::error::Error;
use tracing::{debug, error, info};

/// Event handler that relays direct-message reports.
#[derive(Debug, Clone)]
pub struct CourierHandler {
    router: MessageRouter,
}

impl CourierHandler {
    /// Create a handler routing through `router`.
    pub fn new(router: MessageRouter) -> Self {
        Self { router }
    }

    /// Gateway intents the relay needs.
    ///
    /// Member events keep the role cache warm; message content is required to
    /// read the report text.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MEMBERS
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
    }

    /// The router messages are handed to.
    pub fn router(&self) -> &MessageRouter {
        &self.router
    }
}

#[async_trait]
impl EventHandler for CourierHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            source = log_source::COMMAND,
            bot_user = %ready.user.name,
            bot_id = %ready.user.id,
            guilds = ready.guilds.len(),
            "Bot connected to Discord"
        );
    }

    async fn cache_ready(&self, _ctx: Context, guilds: Vec<GuildId>) {
        info!(guilds = guilds.len(), "Member cache ready");
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let inbound = match inbound_message(&msg) {
            Ok(inbound) => inbound,
            Err(e) => {
                error!(
                    error = &e as &(dyn Error + 'static),
                    trace = %e.location(),
                    "Failed to read message"
                );
                return;
            }
        };

        let bot_id = UserId(ctx.cache.current_user().id.get());
        let platform = SerenityPlatform::from_context(&ctx);

        match self.router.route(&platform, bot_id, &inbound).await {
            Ok(RouteOutcome::Relayed {
                destination_messages,
            }) => {
                debug!(message_id = %msg.id, destination_messages, "Report handled");
            }
            Ok(RouteOutcome::Dropped(_)) => {}
            Err(e) => {
                error!(
                    message_id = %msg.id,
                    author = %inbound.author_tag(),
                    error = &e as &(dyn Error + 'static),
                    trace = %e.location(),
                    "Failed to relay report"
                );
            }
        }
    }
}
