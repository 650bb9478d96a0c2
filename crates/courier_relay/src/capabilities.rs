//! Platform capabilities consumed by the relay pipeline.

use async_trait::async_trait;
use courier_core::{ChannelId, CommunityId, RoleSet, UserId};
use courier_error::{DeliveryError, ResolveError};

/// Read access to the gateway client's member cache.
///
/// The cache is owned and mutated by the gateway client; the relay only reads it.
pub trait MembershipCache: Send + Sync {
    /// Roles of `user` in `community` if the member is cached.
    fn cached_roles(&self, community: CommunityId, user: UserId) -> Option<RoleSet>;
}

/// On-demand member lookup, used only when the cache misses.
#[async_trait]
pub trait MemberFetcher: Send + Sync {
    /// Fetch the roles of `user` in `community` over the network.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the platform reports that no such member exists.
    ///
    /// # Errors
    ///
    /// Returns an error only when the request itself fails.
    async fn fetch_member_roles(
        &self,
        community: CommunityId,
        user: UserId,
    ) -> Result<Option<RoleSet>, ResolveError>;
}

/// Outbound text delivery.
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Send `content` to `channel` as a single message.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform rejects or fails the send.
    async fn send(&self, channel: ChannelId, content: &str) -> Result<(), DeliveryError>;
}
