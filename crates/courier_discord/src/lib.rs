//! Discord integration for Courier.
//!
//! Connects the platform-agnostic relay pipeline to Discord through Serenity:
//! - **platform**: `SerenityPlatform`, implementing the relay capabilities on
//!   top of Serenity's member cache and HTTP client
//! - **handler**: `CourierHandler`, Serenity's `EventHandler` feeding direct
//!   messages into the `MessageRouter`
//! - **client**: `CourierBot`, client construction and lifecycle
//! - **error**: Discord-specific error types
//!
//! # Usage
//!
//! ```rust,ignore
//! use courier_core::RelayConfig;
//! use courier_discord::CourierBot;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Arc::new(RelayConfig::from_file("courier.toml", None)?);
//!     let mut bot = CourierBot::new(config).await?;
//!     bot.start().await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod conversions;
mod error;
mod handler;
mod platform;

pub use client::CourierBot;
pub use conversions::inbound_message;
pub use error::{DiscordError, DiscordErrorKind, DiscordResult};
pub use handler::CourierHandler;
pub use platform::SerenityPlatform;
