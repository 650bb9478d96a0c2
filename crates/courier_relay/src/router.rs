//! Inbound message routing.

use crate::{
    AuthorizationGate, ChunkedDelivery, IdentityResolver, MemberFetcher, MembershipCache,
    MessageSink, Rejection, Verdict,
};
use courier_core::{InboundMessage, RelayConfig, UserId, log_source};
use courier_error::CourierResult;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// What the router did with a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Relayed to the destination channel and acknowledged to the sender.
    Relayed {
        /// Messages sent to the destination channel (1 or 2).
        destination_messages: usize,
    },
    /// Dropped without any reply.
    Dropped(Rejection),
}

/// Provenance line prefixed to every relayed report.
///
/// # Examples
///
/// ```
/// use courier_core::{ChannelId, InboundMessageBuilder, UserId};
/// use courier_relay::provenance_header;
///
/// let msg = InboundMessageBuilder::default()
///     .author_id(UserId(123))
///     .author_name("U".to_string())
///     .author_discriminator(Some(1))
///     .content("Someone is harassing me".to_string())
///     .channel_id(ChannelId(9))
///     .build()
///     .unwrap();
///
/// assert_eq!(provenance_header(&msg), "Message received from U#0001 [123]");
/// ```
pub fn provenance_header(message: &InboundMessage) -> String {
    format!(
        "Message received from {} [{}]",
        message.author_tag(),
        message.author_id()
    )
}

/// Reply sent to the reporter once their report has been relayed.
pub fn acknowledgement(message: &InboundMessage) -> String {
    format!(
        "Thank you for your report {}, it has been forwarded to the relevant channel.",
        message.author_mention()
    )
}

/// Routes direct messages from authorized members into the staff channel.
///
/// The router keeps no per-message state, so concurrent invocations for
/// different messages are independent.
#[derive(Debug, Clone)]
pub struct MessageRouter {
    config: Arc<RelayConfig>,
    gate: AuthorizationGate,
    delivery: ChunkedDelivery,
}

impl MessageRouter {
    /// Create a router from the process configuration.
    pub fn new(config: Arc<RelayConfig>) -> Self {
        let gate = AuthorizationGate::new(*config.authorized_role_id());
        let delivery = ChunkedDelivery::new(*config.max_message_length());
        Self {
            config,
            gate,
            delivery,
        }
    }

    /// The configuration this router was built with.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Handle one inbound message.
    ///
    /// Unauthorized messages are dropped without a reply. Approved messages
    /// are relayed to the destination channel, then acknowledged in the
    /// channel they came from.
    ///
    /// # Errors
    ///
    /// Returns an error if the fallback membership lookup fails or any send
    /// fails. Nothing is retried; when the relay fails the acknowledgement is
    /// not sent.
    #[instrument(
        skip_all,
        fields(author = %message.author_id(), channel = %message.channel_id())
    )]
    pub async fn route<P>(
        &self,
        platform: &P,
        bot_id: UserId,
        message: &InboundMessage,
    ) -> CourierResult<RouteOutcome>
    where
        P: MembershipCache + MemberFetcher + MessageSink + ?Sized,
    {
        if let Some(rejection) = self.gate.screen(message, bot_id) {
            return Ok(Self::dropped(rejection));
        }

        debug!(
            source = log_source::INBOUND_MESSAGE,
            "{}: {}",
            message.author_tag(),
            message.content()
        );

        let membership = IdentityResolver::new(platform, platform)
            .resolve(*message.author_id(), *self.config.community_id())
            .await?;

        if let Verdict::Rejected(rejection) = self.gate.evaluate(message, bot_id, &membership) {
            return Ok(Self::dropped(rejection));
        }

        let destination = *self.config.destination_channel_id();
        let header = provenance_header(message);
        let destination_messages = self
            .delivery
            .deliver(platform, destination, &header, message.content())
            .await?;

        platform
            .send(*message.channel_id(), &acknowledgement(message))
            .await?;

        info!(
            reporter = %message.author_tag(),
            destination = %destination,
            destination_messages,
            "Report relayed"
        );

        Ok(RouteOutcome::Relayed {
            destination_messages,
        })
    }

    fn dropped(rejection: Rejection) -> RouteOutcome {
        debug!(reason = %rejection, "Message dropped");
        RouteOutcome::Dropped(rejection)
    }
}
