//! Logging bootstrap.

use crate::{CourierLogLayer, LogFormatter};
use std::env;
use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,courier=debug";

/// Configuration for process logging.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directives (e.g., "info", "serenity=warn,debug")
    pub filter: String,
    /// Emit ANSI colors
    pub ansi: bool,
    /// `chrono` format string for the timestamp prefix
    pub timestamp_format: Option<String>,
}

impl LoggingConfig {
    /// Configuration from the environment: `RUST_LOG` if set, colors when
    /// stdout is a terminal.
    pub fn new() -> Self {
        Self {
            filter: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string()),
            ansi: std::io::stdout().is_terminal(),
            timestamp_format: None,
        }
    }

    /// Set the filter directives.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Enable or disable colors.
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Set the timestamp format.
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = Some(format.into());
        self
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the global subscriber: an `EnvFilter` in front of
/// [`CourierLogLayer`] writing to stdout.
///
/// # Errors
///
/// Returns an error if the filter directives do not parse or a global
/// subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_new(&config.filter)?;

    let mut formatter = LogFormatter::default();
    if let Some(format) = config.timestamp_format {
        formatter = formatter.with_timestamp_format(format);
    }

    let layer = CourierLogLayer::stdout()
        .with_ansi(config.ansi)
        .with_formatter(formatter);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .try_init()?;

    Ok(())
}
