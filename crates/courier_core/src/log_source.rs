//! Source tags with special handling in the log formatter.
//!
//! Attach one of these as the `source` field of a tracing event.

/// Lifecycle and command events from the binary.
pub const COMMAND: &str = "Command";

/// Trace of a message arriving from the gateway.
pub const INBOUND_MESSAGE: &str = "<<Message";

/// Echo of a message the bot sent. Never printed.
pub const OUTBOUND_MESSAGE: &str = ">>Message";
