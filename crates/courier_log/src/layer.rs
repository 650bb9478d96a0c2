//! Bridge from `tracing` events to the log formatter.

use crate::{LogError, LogEvent, LogFormatter, Severity};
use std::error::Error;
use std::fmt;
use std::io::Write;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Context, Layer};

/// A `tracing_subscriber` layer that prints every event through
/// [`LogFormatter`].
///
/// Recognized event fields:
/// - `message` - the event text
/// - `source` - the source tag; defaults to the first segment of the target
/// - `error` - an error, walked through its `source()` chain when recorded
///   as `&dyn Error`
/// - `trace` - a trace printed after the innermost error message
///
/// Any other field is appended to the text as `name=value`.
///
/// Each line is written to a fresh writer from `make_writer` before
/// `on_event` returns; nothing is buffered across events.
pub struct CourierLogLayer<W> {
    formatter: LogFormatter,
    make_writer: W,
    ansi: bool,
}

impl CourierLogLayer<fn() -> std::io::Stdout> {
    /// A layer writing colored lines to stdout.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout)
    }
}

impl<W> CourierLogLayer<W>
where
    W: for<'a> MakeWriter<'a> + 'static,
{
    /// A layer writing colored lines to `make_writer`.
    pub fn new(make_writer: W) -> Self {
        Self {
            formatter: LogFormatter::default(),
            make_writer,
            ansi: true,
        }
    }

    /// Enable or disable ANSI colors.
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Replace the formatter.
    pub fn with_formatter(mut self, formatter: LogFormatter) -> Self {
        self.formatter = formatter;
        self
    }
}

impl<S, W> Layer<S> for CourierLogLayer<W>
where
    S: Subscriber,
    W: for<'a> MakeWriter<'a> + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let log_event = visitor.into_log_event(Severity::from(*metadata.level()), metadata.target());
        if let Some(line) = self.formatter.format(&log_event) {
            let mut writer = self.make_writer.make_writer_for(metadata);
            let _ = writeln!(writer, "{}", line.render(self.ansi));
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    source: Option<String>,
    error: Option<LogError>,
    trace: Option<String>,
    fields: Vec<String>,
}

impl EventVisitor {
    fn record_value(&mut self, name: &str, value: String) {
        match name {
            "message" => self.message = Some(value),
            "source" => self.source = Some(value),
            "trace" => self.trace = Some(value),
            "error" => self.error = Some(LogError::cause(value)),
            _ => self.fields.push(format!("{name}={value}")),
        }
    }

    fn into_log_event(self, severity: Severity, target: &str) -> LogEvent {
        let source = self
            .source
            .unwrap_or_else(|| target.split("::").next().unwrap_or(target).to_string());
        let mut event = LogEvent::new(severity).with_source(source);

        let fields = self.fields.join(" ");
        let message = match (self.message, fields.is_empty()) {
            (Some(message), true) => Some(message),
            (Some(message), false) => Some(format!("{message} {fields}")),
            (None, false) => Some(fields),
            (None, true) => None,
        };
        if let Some(message) = message {
            event = event.with_message(message);
        }

        if let Some(error) = self.error {
            event = event.with_error(match self.trace {
                Some(trace) => error.with_trace(trace),
                None => error,
            });
        }

        event
    }
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_value(field.name(), value.to_string());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn Error + 'static)) {
        if field.name() == "error" {
            self.error = Some(LogError::from_error(value));
        } else {
            self.record_value(field.name(), value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_value(field.name(), format!("{value:?}"));
    }
}
