//! Courier - Discord report relay
//!
//! Courier is a Discord bot that lets members of one community send reports
//! by direct message. Reports from members holding the authorized role are
//! relayed, with a provenance header, into a staff channel, and the reporter
//! receives an acknowledgement. Everyone else is silently ignored.
//!
//! # Architecture
//!
//! Courier is organized as a workspace with focused crates:
//!
//! - `courier-error` - Error types
//! - `courier-core` - Ids, messages, membership and configuration
//! - `courier-relay` - Identity resolution, authorization, routing and chunked delivery
//! - `courier-log` - Log formatting and the tracing layer
//! - `courier-discord` - Serenity integration
//!
//! This crate (`courier`) re-exports everything and provides the binary.

pub mod cli;

pub use courier_core::*;
pub use courier_discord::{CourierBot, CourierHandler, DiscordError, DiscordErrorKind};
pub use courier_error::*;
pub use courier_log::{LoggingConfig, init_logging};
pub use courier_relay::*;
