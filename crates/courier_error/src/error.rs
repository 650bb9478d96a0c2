//! Top-level error wrapper types.

use crate::{ConfigError, DeliveryError, ResolveError};

/// The foundation error enum.
///
/// # Examples
///
/// ```
/// use courier_error::{CourierErrorKind, DeliveryError};
///
/// let err: CourierErrorKind = DeliveryError::new(7, "Unknown Channel").into();
/// assert!(format!("{}", err).contains("Delivery Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CourierErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Membership lookup failed at the network layer
    #[from(ResolveError)]
    Resolve(ResolveError),
    /// Outbound send failed
    #[from(DeliveryError)]
    Delivery(DeliveryError),
}

/// Courier error with kind discrimination.
///
/// # Examples
///
/// ```
/// use courier_error::{ConfigError, ConfigErrorKind, CourierResult};
///
/// fn might_fail() -> CourierResult<()> {
///     Err(ConfigError::new(ConfigErrorKind::Parse("expected table".into())))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Courier Error: {}", _0)]
pub struct CourierError(Box<CourierErrorKind>);

impl CourierError {
    /// Create a new error from a kind.
    pub fn new(kind: CourierErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CourierErrorKind {
        &self.0
    }

    /// Source location where the underlying error was raised, as `at file:line`.
    pub fn location(&self) -> String {
        let (file, line) = match self.kind() {
            CourierErrorKind::Config(e) => (e.file, e.line),
            CourierErrorKind::Resolve(e) => (e.file, e.line),
            CourierErrorKind::Delivery(e) => (e.file, e.line),
        };
        format!("at {file}:{line}")
    }
}

// Generic From implementation for any type that converts to CourierErrorKind
impl<T> From<T> for CourierError
where
    T: Into<CourierErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Courier operations.
pub type CourierResult<T> = std::result::Result<T, CourierError>;
