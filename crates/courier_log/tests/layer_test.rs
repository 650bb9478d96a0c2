//! Tests for the tracing layer writing formatted lines.

use courier_core::log_source;
use courier_log::CourierLogLayer;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;

/// In-memory sink shared between the layer and the test.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().expect("buffer lock").clone();
        String::from_utf8(bytes)
            .expect("utf8 output")
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = SharedBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("relay failed")]
struct RelayFailed {
    source: io::Error,
}

fn capture(f: impl FnOnce()) -> Vec<String> {
    let buffer = SharedBuffer::default();
    let subscriber = tracing_subscriber::registry()
        .with(CourierLogLayer::new(buffer.clone()).with_ansi(false));
    tracing::subscriber::with_default(subscriber, f);
    buffer.lines()
}

#[test]
fn test_event_is_written_with_explicit_source() {
    let lines = capture(|| tracing::info!(source = log_source::COMMAND, "Bot starting"));

    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("[Command] ["));
    assert!(lines[0].ends_with("] Bot starting"));
}

#[test]
fn test_source_defaults_to_target_crate() {
    let lines = capture(|| tracing::warn!(target: "serenity::gateway::shard", "Heartbeat late"));

    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("[serenity] ["));
}

#[test]
fn test_outbound_echo_produces_no_line() {
    let lines = capture(|| {
        tracing::debug!(source = log_source::OUTBOUND_MESSAGE, "sent report");
        tracing::info!("after");
    });

    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("after"));
}

#[test]
fn test_error_chain_is_unwrapped_to_innermost_cause() {
    let err = RelayFailed {
        source: io::Error::new(io::ErrorKind::ConnectionReset, "connection reset"),
    };
    let lines = capture(|| {
        tracing::error!(error = &err as &(dyn std::error::Error + 'static), "Handler failed")
    });

    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("] Handler failed: connection reset"));
}

#[test]
fn test_error_without_message_is_used_as_text() {
    let lines = capture(|| tracing::error!(error = %"gateway closed"));

    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("] gateway closed"));
}

#[test]
fn test_extra_fields_are_appended() {
    let lines = capture(|| tracing::info!(channel = 42, "Report relayed"));

    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("] Report relayed channel=42"));
}

#[test]
fn test_events_are_written_in_order() {
    let lines = capture(|| {
        tracing::info!("one");
        tracing::warn!("two");
        tracing::error!("three");
    });

    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("one"));
    assert!(lines[1].ends_with("two"));
    assert!(lines[2].ends_with("three"));
}

#[test]
fn test_trace_field_follows_innermost_cause() {
    let err = RelayFailed {
        source: io::Error::new(io::ErrorKind::ConnectionReset, "connection reset"),
    };
    let lines = capture(|| {
        tracing::error!(
            error = &err as &(dyn std::error::Error + 'static),
            trace = %"at crates/courier_relay/src/router.rs:137",
            "Failed to relay report"
        )
    });

    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("] Failed to relay report: connection reset"));
    assert_eq!(lines[1], "at crates/courier_relay/src/router.rs:137");
}

#[test]
fn test_noisy_reconnect_drops_trace_field() {
    let lines = capture(|| {
        tracing::warn!(
            error = %courier_log::NOISY_RECONNECT_MESSAGE,
            trace = %"at shard.rs:10",
            "Reconnecting"
        )
    });

    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(courier_log::NOISY_RECONNECT_MESSAGE));
}
