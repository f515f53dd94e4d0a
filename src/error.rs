use alloc::string::String;

/// Detailed cause of a [`ValidationError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A URI string or path is empty where non-empty is required.
    EmptyInput,
    /// The scheme is absent or not in the allow-list.
    InvalidScheme,
    /// The auth component starts with `:` or has more than two
    /// `:`-separated parts.
    InvalidAuth,
    /// The hostname is empty.
    InvalidHost,
    /// The port is present but is not an integer.
    InvalidPort,
}

/// An error raised when invalid input reaches a parse constructor
/// or a setter.
///
/// Every error carries a human-readable message and the offending
/// received value; some also carry the expected value set. The failed
/// operation leaves its receiver untouched.
///
/// # Examples
///
/// ```
/// use tidy_uri::{Uri, ValidationErrorKind};
///
/// let err = Uri::parse("http://a:b:c@test.com/").unwrap_err();
/// assert_eq!(err.kind(), ValidationErrorKind::InvalidAuth);
/// assert_eq!(err.received(), Some("a:b:c"));
/// assert_eq!(
///     err.to_string(),
///     "Auth cannot have more than 2 parts. Received: [a:b:c] Expected: [username:password]"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub(crate) kind: ValidationErrorKind,
    pub(crate) message: &'static str,
    pub(crate) received: Option<String>,
    pub(crate) expected: Option<String>,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: &'static str) -> Self {
        Self {
            kind,
            message,
            received: None,
            expected: None,
        }
    }

    pub(crate) fn with_received(mut self, received: impl Into<String>) -> Self {
        self.received = Some(received.into());
        self
    }

    pub(crate) fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Returns the detailed cause of the error.
    #[must_use]
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// Returns the human-readable message, without the received and
    /// expected value suffixes.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message
    }

    /// Returns the received value that failed validation, rendered
    /// as text.
    #[must_use]
    pub fn received(&self) -> Option<&str> {
        self.received.as_deref()
    }

    /// Returns the expected value set or format, when one applies.
    #[must_use]
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}
