//! Two-tier membership lookup.

use crate::{MemberFetcher, MembershipCache};
use courier_core::{CommunityId, Membership, UserId};
use courier_error::ResolveError;
use tracing::{debug, instrument};

/// Resolves a user's role set, reading the member cache first and paying for
/// a network lookup only on a miss.
///
/// The cache can lag real membership (for example a user who joined before the
/// current gateway session started), which is why a miss is not final.
pub struct IdentityResolver<'a, C: ?Sized, F: ?Sized> {
    cache: &'a C,
    fetcher: &'a F,
}

impl<'a, C, F> IdentityResolver<'a, C, F>
where
    C: MembershipCache + ?Sized,
    F: MemberFetcher + ?Sized,
{
    /// Create a resolver over the given cache and fallback fetcher.
    pub fn new(cache: &'a C, fetcher: &'a F) -> Self {
        Self { cache, fetcher }
    }

    /// Resolve `user`'s membership in `community`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the fallback request fails. A user the platform
    /// does not know as a member resolves to [`Membership::NotMember`].
    #[instrument(skip_all, fields(community = %community, user = %user))]
    pub async fn resolve(
        &self,
        user: UserId,
        community: CommunityId,
    ) -> Result<Membership, ResolveError> {
        if let Some(roles) = self.cache.cached_roles(community, user) {
            debug!(roles = roles.len(), "Member found in cache");
            return Ok(Membership::Member(roles));
        }

        debug!("Member not cached, fetching");
        match self.fetcher.fetch_member_roles(community, user).await? {
            Some(roles) => {
                debug!(roles = roles.len(), "Member fetched");
                Ok(Membership::Member(roles))
            }
            None => {
                debug!("No such member");
                Ok(Membership::NotMember)
            }
        }
    }
}
