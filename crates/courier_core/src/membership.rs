//! Role sets and membership outcomes.

use crate::RoleId;
use std::collections::HashSet;

/// The roles one user holds within one community.
///
/// Built fresh for each authorization check and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet(HashSet<RoleId>);

impl RoleSet {
    /// Whether the set contains `role`.
    pub fn contains(&self, role: RoleId) -> bool {
        self.0.contains(&role)
    }

    /// Number of roles held.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no roles are held.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the held roles in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &RoleId> {
        self.0.iter()
    }
}

impl FromIterator<RoleId> for RoleSet {
    fn from_iter<I: IntoIterator<Item = RoleId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Result of resolving a user's membership in the target community.
///
/// `NotMember` is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Membership {
    /// The user is a member holding these roles.
    Member(RoleSet),
    /// Neither the cache nor the fallback lookup found the user.
    NotMember,
}

impl Membership {
    /// Role set of a member, `None` when not a member.
    pub fn roles(&self) -> Option<&RoleSet> {
        match self {
            Self::Member(roles) => Some(roles),
            Self::NotMember => None,
        }
    }
}
