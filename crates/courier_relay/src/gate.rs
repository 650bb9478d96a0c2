//! Authorization rules for report submission.

use courier_core::{InboundMessage, Membership, RoleId, UserId};

/// Why a message was not relayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Rejection {
    /// Authored by this bot.
    #[display("authored by this bot")]
    OwnMessage,
    /// Authored by another bot account.
    #[display("authored by a bot account")]
    BotAuthor,
    /// Sent in a community channel rather than a private one.
    #[display("sent in a community channel")]
    CommunityChannel,
    /// Author is not a member of the target community.
    #[display("author is not a community member")]
    NotAMember,
    /// Author is a member but lacks the authorized role.
    #[display("author lacks the authorized role")]
    NotAuthorized,
}

/// Outcome of evaluating a message against the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The message may be relayed.
    Approved,
    /// The message must be dropped silently.
    Rejected(Rejection),
}

impl Verdict {
    /// Whether the verdict is [`Verdict::Approved`].
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

/// Decides whether a message author may submit a report.
///
/// Exactly one role is recognized. Rules are evaluated in order and the first
/// failing rule decides:
/// 1. bot authors (including this bot) are rejected
/// 2. community channels are rejected, only private channels are eligible
/// 3. non-members are rejected
/// 4. members are approved iff they hold the authorized role
#[derive(Debug, Clone, Copy)]
pub struct AuthorizationGate {
    authorized_role: RoleId,
}

impl AuthorizationGate {
    /// Create a gate for the given role.
    pub fn new(authorized_role: RoleId) -> Self {
        Self { authorized_role }
    }

    /// The role required for approval.
    pub fn authorized_role(&self) -> RoleId {
        self.authorized_role
    }

    /// Apply the rules that need no membership data (1 and 2).
    ///
    /// Lets the caller skip the membership lookup for messages that can never
    /// be approved.
    pub fn screen(&self, message: &InboundMessage, bot_id: UserId) -> Option<Rejection> {
        if *message.author_id() == bot_id {
            return Some(Rejection::OwnMessage);
        }
        if *message.author_is_bot() {
            return Some(Rejection::BotAuthor);
        }
        if !message.is_private() {
            return Some(Rejection::CommunityChannel);
        }
        None
    }

    /// Apply every rule.
    pub fn evaluate(
        &self,
        message: &InboundMessage,
        bot_id: UserId,
        membership: &Membership,
    ) -> Verdict {
        if let Some(rejection) = self.screen(message, bot_id) {
            return Verdict::Rejected(rejection);
        }
        match membership.roles() {
            None => Verdict::Rejected(Rejection::NotAMember),
            Some(roles) if roles.contains(self.authorized_role) => Verdict::Approved,
            Some(_) => Verdict::Rejected(Rejection::NotAuthorized),
        }
    }

    /// Boolean form of [`AuthorizationGate::evaluate`].
    pub fn is_authorized(
        &self,
        message: &InboundMessage,
        bot_id: UserId,
        membership: &Membership,
    ) -> bool {
        self.evaluate(message, bot_id, membership).is_approved()
    }
}
