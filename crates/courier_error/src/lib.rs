//! Error types for the Courier relay bot.
//!
//! This crate provides the foundation error types used throughout the Courier workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Negative authorization outcomes (not a member, missing role) are *not* errors.
//! They are ordinary values in `courier_core` and never pass through this crate.
//!
//! # Examples
//!
//! ```
//! use courier_error::{CourierResult, DeliveryError};
//!
//! fn send_report() -> CourierResult<()> {
//!     Err(DeliveryError::new(42, "Connection reset"))?
//! }
//!
//! match send_report() {
//!     Ok(()) => println!("Delivered"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod delivery;
mod error;
mod resolve;

pub use config::{ConfigError, ConfigErrorKind};
pub use delivery::DeliveryError;
pub use error::{CourierError, CourierErrorKind, CourierResult};
pub use resolve::ResolveError;
