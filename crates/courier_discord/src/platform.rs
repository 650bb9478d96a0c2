//! Relay capabilities backed by Serenity's cache and HTTP client.

use async_trait::async_trait;
use courier_core::{ChannelId, CommunityId, RoleId, RoleSet, UserId};
use courier_error::{DeliveryError, ResolveError};
use courier_relay::{MemberFetcher, MembershipCache, MessageSink};
use serenity::all::{Cache, Context, GuildId, Http};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Discord access for the relay pipeline.
///
/// Cheap to clone; holds shared handles to the gateway client's cache and
/// HTTP client.
#[derive(Clone)]
pub struct SerenityPlatform {
    cache: Arc<Cache>,
    http: Arc<Http>,
}

impl SerenityPlatform {
    /// Create a platform from explicit handles.
    pub fn new(cache: Arc<Cache>, http: Arc<Http>) -> Self {
        Self { cache, http }
    }

    /// Borrow the handles of an event context.
    pub fn from_context(ctx: &Context) -> Self {
        Self::new(ctx.cache.clone(), ctx.http.clone())
    }
}

impl std::fmt::Debug for SerenityPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerenityPlatform").finish_non_exhaustive()
    }
}

fn role_set(roles: &[serenity::all::RoleId]) -> RoleSet {
    roles.iter().map(|r| RoleId(r.get())).collect()
}

fn is_not_found(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Http(e) => e.status_code().is_some_and(|s| s.as_u16() == 404),
        _ => false,
    }
}

impl MembershipCache for SerenityPlatform {
    fn cached_roles(&self, community: CommunityId, user: UserId) -> Option<RoleSet> {
        // The cache guard is not Send; copy the roles out before returning.
        let user = serenity::all::UserId::new(user.get());
        self.cache
            .guild(GuildId::new(community.get()))
            .and_then(|guild| guild.members.get(&user).map(|member| role_set(&member.roles)))
    }
}

#[async_trait]
impl MemberFetcher for SerenityPlatform {
    #[instrument(skip_all, fields(community = %community, user = %user))]
    async fn fetch_member_roles(
        &self,
        community: CommunityId,
        user: UserId,
    ) -> Result<Option<RoleSet>, ResolveError> {
        match self
            .http
            .get_member(
                GuildId::new(community.get()),
                serenity::all::UserId::new(user.get()),
            )
            .await
        {
            Ok(member) => Ok(Some(role_set(&member.roles))),
            Err(e) if is_not_found(&e) => {
                debug!("Member not found in community");
                Ok(None)
            }
            Err(e) => Err(ResolveError::new(
                community.get(),
                user.get(),
                e.to_string(),
            )),
        }
    }
}

#[async_trait]
impl MessageSink for SerenityPlatform {
    async fn send(&self, channel: ChannelId, content: &str) -> Result<(), DeliveryError> {
        serenity::all::ChannelId::new(channel.get())
            .say(self.http.as_ref(), content)
            .await
            .map(|_| ())
            .map_err(|e| DeliveryError::new(channel.get(), e.to_string()))
    }
}
