//! Size-aware outbound delivery.

use crate::MessageSink;
use courier_core::{ChannelId, DEFAULT_MAX_MESSAGE_LENGTH, log_source};
use courier_error::DeliveryError;
use tracing::{debug, warn};

/// Sends a header and body to a channel, splitting them when the combined
/// message would exceed the platform's length limit.
///
/// If `header + "\n" + body` fits, one message is sent. Otherwise the header
/// and the body go out as two messages, in that order. The body is never
/// split further: a body longer than the limit on its own is sent as-is and
/// left to the platform to accept or reject.
///
/// Lengths are counted in characters.
#[derive(Debug, Clone, Copy)]
pub struct ChunkedDelivery {
    max_length: usize,
}

impl Default for ChunkedDelivery {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MESSAGE_LENGTH)
    }
}

impl ChunkedDelivery {
    /// Create a delivery with the given per-message character limit.
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Per-message character limit.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// The messages that [`ChunkedDelivery::deliver`] would send, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use courier_relay::ChunkedDelivery;
    ///
    /// let delivery = ChunkedDelivery::new(10);
    /// assert_eq!(delivery.plan("ab", "cdef"), vec!["ab\ncdef".to_string()]);
    /// assert_eq!(delivery.plan("abcd", "efghi"), vec!["abcd".to_string(), "efghi".to_string()]);
    /// ```
    pub fn plan(&self, header: &str, body: &str) -> Vec<String> {
        let combined = header.chars().count() + body.chars().count() + 2;
        if combined <= self.max_length {
            vec![format!("{header}\n{body}")]
        } else {
            vec![header.to_string(), body.to_string()]
        }
    }

    /// Send header and body to `channel`.
    ///
    /// # Returns
    ///
    /// Number of messages sent (1 or 2).
    ///
    /// # Errors
    ///
    /// Returns the first send failure. A failed header send means the body is
    /// not attempted.
    pub async fn deliver<S>(
        &self,
        sink: &S,
        channel: ChannelId,
        header: &str,
        body: &str,
    ) -> Result<usize, DeliveryError>
    where
        S: MessageSink + ?Sized,
    {
        let messages = self.plan(header, body);
        if messages.len() > 1 && body.chars().count() > self.max_length {
            warn!(
                channel = %channel,
                body_length = body.chars().count(),
                max_length = self.max_length,
                "Body exceeds the message limit and is sent unsplit"
            );
        }

        for content in &messages {
            sink.send(channel, content).await?;
            debug!(source = log_source::OUTBOUND_MESSAGE, channel = %channel, "{}", content);
        }

        Ok(messages.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_limit_is_single_message() {
        // 3 + 5 + 2 == 10
        let delivery = ChunkedDelivery::new(10);
        assert_eq!(delivery.plan("abc", "defgh"), vec!["abc\ndefgh".to_string()]);
    }

    #[test]
    fn test_one_over_limit_is_two_messages() {
        // 3 + 6 + 2 == 11
        let delivery = ChunkedDelivery::new(10);
        assert_eq!(
            delivery.plan("abc", "defghi"),
            vec!["abc".to_string(), "defghi".to_string()]
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Four two-byte characters: 8 bytes but 4 chars; 2 + 4 + 2 == 8
        let delivery = ChunkedDelivery::new(8);
        assert_eq!(delivery.plan("hi", "éééé").len(), 1);
    }

    #[test]
    fn test_oversized_body_is_not_split() {
        let delivery = ChunkedDelivery::new(10);
        let body = "x".repeat(25);
        let plan = delivery.plan("head", &body);
        assert_eq!(plan, vec!["head".to_string(), body]);
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(ChunkedDelivery::default().max_length(), 2000);
    }
}
