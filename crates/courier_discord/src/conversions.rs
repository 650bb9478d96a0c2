//! Conversions from Serenity models to the relay's model.

use crate::{DiscordError, DiscordErrorKind, DiscordResult};
use courier_core::{ChannelId, CommunityId, InboundMessage, InboundMessageBuilder, UserId};
use serenity::model::channel::Message;

/// Convert a gateway message into an [`InboundMessage`].
///
/// A message without a guild id arrived in a private channel.
///
/// # Errors
///
/// Returns an error if the message cannot be represented, which indicates a
/// bug rather than bad input.
#[track_caller]
pub fn inbound_message(msg: &Message) -> DiscordResult<InboundMessage> {
    InboundMessageBuilder::default()
        .author_id(UserId(msg.author.id.get()))
        .author_name(msg.author.name.clone())
        .author_discriminator(msg.author.discriminator.map(|d| d.get()))
        .author_is_bot(msg.author.bot)
        .content(msg.content.clone())
        .channel_id(ChannelId(msg.channel_id.get()))
        .community_id(msg.guild_id.map(|g| CommunityId(g.get())))
        .build()
        .map_err(|e| DiscordError::new(DiscordErrorKind::ConversionFailed(e.to_string())))
}
