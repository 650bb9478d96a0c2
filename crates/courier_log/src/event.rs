//! Log event model.

use crossterm::style::Color;
use derive_getters::Getters;
use std::error::Error;

/// Event severity, most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Severity {
    /// Something failed.
    #[display("error")]
    Error,
    /// Something unexpected that did not fail.
    #[display("warning")]
    Warning,
    /// Normal operation.
    #[display("info")]
    Info,
    /// Detailed operation.
    #[display("verbose")]
    Verbose,
    /// Everything else.
    #[display("debug")]
    Debug,
}

impl Severity {
    /// Display color for this severity.
    pub fn color(self) -> Color {
        match self {
            Self::Error => Color::Red,
            Self::Warning => Color::Yellow,
            Self::Info => Color::White,
            Self::Verbose => Color::Grey,
            Self::Debug => Color::DarkGrey,
        }
    }
}

impl From<tracing::Level> for Severity {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::ERROR => Self::Error,
            tracing::Level::WARN => Self::Warning,
            tracing::Level::INFO => Self::Info,
            tracing::Level::DEBUG => Self::Verbose,
            _ => Self::Debug,
        }
    }
}

/// An error attached to a log event, as an explicit chain of layers.
///
/// Wrapper layers only add context; the formatter reports the innermost cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    /// A layer wrapping a deeper cause.
    Wrapped {
        /// This layer's own message.
        message: String,
        /// The wrapped cause.
        cause: Box<LogError>,
    },
    /// The innermost cause.
    Cause {
        /// Error message.
        message: String,
        /// Optional trace printed after the message.
        trace: Option<String>,
    },
}

impl LogError {
    /// A single-layer error.
    pub fn cause(message: impl Into<String>) -> Self {
        Self::Cause {
            message: message.into(),
            trace: None,
        }
    }

    /// Wrap `self` in another layer.
    pub fn wrap(self, message: impl Into<String>) -> Self {
        Self::Wrapped {
            message: message.into(),
            cause: Box::new(self),
        }
    }

    /// Attach a trace to the innermost cause.
    pub fn with_trace(self, trace: impl Into<String>) -> Self {
        match self {
            Self::Wrapped { message, cause } => Self::Wrapped {
                message,
                cause: Box::new((*cause).with_trace(trace)),
            },
            Self::Cause { message, .. } => Self::Cause {
                message,
                trace: Some(trace.into()),
            },
        }
    }

    /// Convert a standard error and its `source()` chain.
    ///
    /// Every error with a source becomes a wrapper layer; the last error in
    /// the chain becomes the cause.
    pub fn from_error(err: &(dyn Error + 'static)) -> Self {
        let mut messages = vec![err.to_string()];
        let mut current = err.source();
        while let Some(source) = current {
            messages.push(source.to_string());
            current = source.source();
        }

        let mut chain = Self::cause(messages.pop().unwrap_or_default());
        while let Some(message) = messages.pop() {
            chain = chain.wrap(message);
        }
        chain
    }

    /// Walk the chain to the innermost cause.
    ///
    /// Returns the cause's message and trace.
    pub fn innermost(&self) -> (&str, Option<&str>) {
        let mut current = self;
        loop {
            match current {
                Self::Wrapped { cause, .. } => current = cause.as_ref(),
                Self::Cause { message, trace } => return (message.as_str(), trace.as_deref()),
            }
        }
    }

    /// Number of layers, including the cause.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self;
        while let Self::Wrapped { cause, .. } = current {
            depth += 1;
            current = cause.as_ref();
        }
        depth
    }
}

/// A diagnostic event awaiting formatting.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct LogEvent {
    severity: Severity,
    source: Option<String>,
    message: Option<String>,
    error: Option<LogError>,
}

impl LogEvent {
    /// An event with neither source, text nor error.
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            source: None,
            message: None,
            error: None,
        }
    }

    /// Set the source tag.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the text.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach an error.
    pub fn with_error(mut self, error: LogError) -> Self {
        self.error = Some(error);
        self
    }
}
