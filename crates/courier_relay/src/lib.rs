//! Report intake pipeline for Courier.
//!
//! This crate holds the only decision logic in the bot. It is written against
//! three capability traits so it never touches the chat platform directly:
//! - `MembershipCache` - the gateway client's local member cache
//! - `MemberFetcher` - the on-demand REST lookup used on cache miss
//! - `MessageSink` - sending text to a channel
//!
//! # Pipeline
//!
//! 1. `AuthorizationGate::screen` rejects bot authors and community channels
//!    before any network call is made
//! 2. `IdentityResolver` reads the member's roles, cache first, REST second
//! 3. `AuthorizationGate::evaluate` approves iff the authorized role is held
//! 4. `ChunkedDelivery` relays header and body to the destination channel
//! 5. The sender receives an acknowledgement in their private channel
//!
//! Rejections are silent: nothing is ever sent back to an unauthorized user.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod capabilities;
mod delivery;
mod gate;
mod resolver;
mod router;

pub use capabilities::{MemberFetcher, MembershipCache, MessageSink};
pub use delivery::ChunkedDelivery;
pub use gate::{AuthorizationGate, Rejection, Verdict};
pub use resolver::IdentityResolver;
pub use router::{MessageRouter, RouteOutcome, acknowledgement, provenance_header};
