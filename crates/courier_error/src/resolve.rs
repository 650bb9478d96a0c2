//! Membership lookup error types.

/// A membership lookup failed at the network layer.
///
/// A user who simply is not in the community is not an error; this type only
/// covers a fallback request that could not be completed.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Resolve Error: member {} of community {}: {} at line {} in {}",
    user_id,
    community_id,
    message,
    line,
    file
)]
pub struct ResolveError {
    /// Community that was queried
    pub community_id: u64,
    /// User that was looked up
    pub user_id: u64,
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ResolveError {
    /// Create a new ResolveError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use courier_error::ResolveError;
    ///
    /// let err = ResolveError::new(1, 2, "HTTP 500");
    /// assert_eq!(err.user_id, 2);
    /// ```
    #[track_caller]
    pub fn new(community_id: u64, user_id: u64, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            community_id,
            user_id,
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
