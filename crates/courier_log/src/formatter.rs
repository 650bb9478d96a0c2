//! Event to text line formatting.

use crate::LogEvent;
use chrono::{Local, NaiveDateTime};
use courier_core::log_source;
use crossterm::style::{Color, Stylize};
use derive_getters::Getters;

/// Gateway reconnect failure that is expected and never gets a trace appended.
pub const NOISY_RECONNECT_MESSAGE: &str = "Reconnect failed: HTTP/1.1 503 Service Unavailable";

const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A formatted line and the color it should be printed in.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct FormattedLine {
    color: Color,
    text: String,
}

impl FormattedLine {
    /// The line as printed, with ANSI color codes when `ansi` is set.
    pub fn render(&self, ansi: bool) -> String {
        if ansi {
            self.text.clone().with(self.color).to_string()
        } else {
            self.text.clone()
        }
    }
}

/// Turns [`LogEvent`]s into single text lines.
#[derive(Debug, Clone)]
pub struct LogFormatter {
    timestamp_format: String,
}

impl Default for LogFormatter {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl LogFormatter {
    /// Use a custom `chrono` format string for the timestamp.
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Format `event` stamped with the current local time.
    ///
    /// Returns `None` when the event is suppressed.
    pub fn format(&self, event: &LogEvent) -> Option<FormattedLine> {
        self.format_at(event, Local::now().naive_local())
    }

    /// Format `event` stamped with `timestamp`.
    ///
    /// Returns `None` when the event is suppressed.
    pub fn format_at(&self, event: &LogEvent, timestamp: NaiveDateTime) -> Option<FormattedLine> {
        let mut color = event.severity().color();

        let mut error_text = event.error().as_ref().map(|error| {
            let (message, trace) = error.innermost();
            match trace {
                Some(trace) if message != NOISY_RECONNECT_MESSAGE => {
                    format!("{message}\n{trace}")
                }
                _ => message.to_string(),
            }
        });

        let source = event.source().as_deref();
        match source {
            Some(log_source::COMMAND) => color = Color::Cyan,
            Some(log_source::INBOUND_MESSAGE) => color = Color::Green,
            Some(log_source::OUTBOUND_MESSAGE) => return None,
            _ => {}
        }

        let text = match event.message() {
            Some(message) => message.clone(),
            None => error_text.take().unwrap_or_default(),
        };

        let mut line = String::with_capacity(
            text.len()
                + source.map_or(0, str::len)
                + error_text.as_ref().map_or(0, String::len)
                + 32,
        );
        if let Some(source) = source {
            line.push('[');
            line.push_str(source);
            line.push_str("] ");
        }
        line.push('[');
        line.push_str(&timestamp.format(&self.timestamp_format).to_string());
        line.push_str("] ");
        line.extend(text.chars().filter(|c| *c == '\n' || !c.is_control()));
        if let Some(error_text) = error_text {
            line.push_str(": ");
            line.push_str(&error_text);
        }

        Some(FormattedLine { color, text: line })
    }
}
