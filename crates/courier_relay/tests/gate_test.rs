//! Tests for authorization rules.

mod test_utils;

use courier_core::{Membership, RoleSet, UserId};
use courier_relay::{AuthorizationGate, Rejection, Verdict};
use test_utils::{
    BOT_ID, OTHER_ROLE, STAFF_ROLE, bot_message, community_message, direct_message,
};

const USER: UserId = UserId(500);

fn member(roles: &[courier_core::RoleId]) -> Membership {
    Membership::Member(roles.iter().copied().collect::<RoleSet>())
}

#[test]
fn test_staff_member_in_dm_is_approved() {
    let gate = AuthorizationGate::new(STAFF_ROLE);
    let verdict = gate.evaluate(&direct_message(USER, "x"), BOT_ID, &member(&[OTHER_ROLE, STAFF_ROLE]));
    assert_eq!(verdict, Verdict::Approved);
    assert!(verdict.is_approved());
}

#[test]
fn test_member_without_role_is_rejected() {
    let gate = AuthorizationGate::new(STAFF_ROLE);
    assert_eq!(
        gate.evaluate(&direct_message(USER, "x"), BOT_ID, &member(&[OTHER_ROLE])),
        Verdict::Rejected(Rejection::NotAuthorized)
    );
}

#[test]
fn test_member_with_no_roles_is_rejected() {
    let gate = AuthorizationGate::new(STAFF_ROLE);
    assert!(!gate.is_authorized(&direct_message(USER, "x"), BOT_ID, &member(&[])));
}

#[test]
fn test_non_member_is_rejected() {
    let gate = AuthorizationGate::new(STAFF_ROLE);
    assert_eq!(
        gate.evaluate(&direct_message(USER, "x"), BOT_ID, &Membership::NotMember),
        Verdict::Rejected(Rejection::NotAMember)
    );
}

#[test]
fn test_bot_rules_take_precedence_over_roles() {
    let gate = AuthorizationGate::new(STAFF_ROLE);
    let staff = member(&[STAFF_ROLE]);

    assert_eq!(
        gate.evaluate(&direct_message(BOT_ID, "x"), BOT_ID, &staff),
        Verdict::Rejected(Rejection::OwnMessage)
    );
    assert_eq!(
        gate.evaluate(&bot_message(USER, "x"), BOT_ID, &staff),
        Verdict::Rejected(Rejection::BotAuthor)
    );
}

#[test]
fn test_community_channel_is_rejected_before_membership() {
    let gate = AuthorizationGate::new(STAFF_ROLE);
    assert_eq!(
        gate.evaluate(&community_message(USER, "x"), BOT_ID, &Membership::NotMember),
        Verdict::Rejected(Rejection::CommunityChannel)
    );
}

#[test]
fn test_screen_passes_eligible_message() {
    let gate = AuthorizationGate::new(STAFF_ROLE);
    assert_eq!(gate.screen(&direct_message(USER, "x"), BOT_ID), None);
    assert_eq!(gate.authorized_role(), STAFF_ROLE);
}
