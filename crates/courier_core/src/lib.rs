//! Core data types for the Courier report relay bot.
//!
//! This crate provides the platform-independent data model shared by the relay
//! pipeline and the platform adapter: typed ids, inbound messages, role sets,
//! membership outcomes and the process-wide relay configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod ids;
pub mod log_source;
mod membership;
mod message;

pub use config::{DEFAULT_MAX_MESSAGE_LENGTH, RelayConfig};
pub use ids::{ChannelId, CommunityId, RoleId, UserId};
pub use membership::{Membership, RoleSet};
pub use message::{InboundMessage, InboundMessageBuilder};
