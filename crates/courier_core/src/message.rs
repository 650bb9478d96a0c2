//! Inbound message model.

use crate::{ChannelId, CommunityId, UserId};
use derive_getters::Getters;

/// A message received from the gateway.
///
/// Built by the platform adapter once per event and consumed by a single
/// routing decision.
///
/// # Examples
///
/// ```
/// use courier_core::{ChannelId, InboundMessageBuilder, UserId};
///
/// let msg = InboundMessageBuilder::default()
///     .author_id(UserId(123))
///     .author_name("U".to_string())
///     .author_discriminator(Some(1))
///     .content("hello".to_string())
///     .channel_id(ChannelId(9))
///     .build()
///     .unwrap();
///
/// assert!(msg.is_private());
/// assert_eq!(msg.author_tag(), "U#0001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
pub struct InboundMessage {
    /// Author account id
    author_id: UserId,
    /// Author username
    author_name: String,
    /// Legacy four-digit discriminator, absent for migrated usernames
    #[builder(default)]
    author_discriminator: Option<u16>,
    /// Whether the author is flagged as a bot account
    #[builder(default)]
    author_is_bot: bool,
    /// Text content
    content: String,
    /// Channel the message arrived in
    channel_id: ChannelId,
    /// Community owning the channel, `None` for private channels
    #[builder(default)]
    community_id: Option<CommunityId>,
}

impl InboundMessage {
    /// Whether the message arrived in a private (non-community) channel.
    pub fn is_private(&self) -> bool {
        self.community_id.is_none()
    }

    /// `name#discriminator`, with `0` standing in for a missing discriminator.
    pub fn author_tag(&self) -> String {
        match self.author_discriminator {
            Some(discriminator) => format!("{}#{:04}", self.author_name, discriminator),
            None => format!("{}#0", self.author_name),
        }
    }

    /// Platform mention markup for the author.
    pub fn author_mention(&self) -> String {
        format!("<@{}>", self.author_id)
    }
}
