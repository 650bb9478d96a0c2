//! Log formatting for Courier.
//!
//! Every diagnostic event, from the relay and from the Discord client alike,
//! is normalized into a [`LogEvent`] and printed as one colored, timestamped
//! line:
//!
//! ```text
//! [source] [2026-10-17 14:03:22] text: innermost error message
//! ```
//!
//! # Source tags
//!
//! - `Command` events are printed in cyan
//! - `<<Message` (inbound message trace) events are printed in green
//! - `>>Message` (outbound message echo) events are suppressed entirely
//!
//! [`CourierLogLayer`] bridges `tracing` into the formatter;
//! [`init_logging`] installs it with an `EnvFilter`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod event;
mod formatter;
mod layer;
mod observability;

pub use event::{LogError, LogEvent, Severity};
pub use formatter::{FormattedLine, LogFormatter, NOISY_RECONNECT_MESSAGE};
pub use layer::CourierLogLayer;
pub use observability::{LoggingConfig, init_logging};
