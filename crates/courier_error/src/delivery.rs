//! Outbound delivery error types.

/// An outbound message could not be sent.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Delivery Error: channel {}: {} at line {} in {}",
    channel_id,
    message,
    line,
    file
)]
pub struct DeliveryError {
    /// Channel the message was addressed to
    pub channel_id: u64,
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl DeliveryError {
    /// Create a new DeliveryError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use courier_error::DeliveryError;
    ///
    /// let err = DeliveryError::new(99, "Missing Access");
    /// assert!(err.to_string().contains("channel 99"));
    /// ```
    #[track_caller]
    pub fn new(channel_id: u64, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            channel_id,
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
