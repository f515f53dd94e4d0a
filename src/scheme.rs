use crate::error::{ValidationError, ValidationErrorKind};
use alloc::string::String;
use core::str::FromStr;

/// The scheme allow-list.
///
/// Only these schemes may appear in a [`Uri`](crate::Uri); any other
/// scheme string is rejected with
/// [`InvalidScheme`](ValidationErrorKind::InvalidScheme).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// `http`
    #[default]
    Http,
    /// `https`
    Https,
    /// `ftp`
    Ftp,
    /// `mailto`
    Mailto,
    /// `file`
    File,
    /// `data`
    Data,
    /// `irc`
    Irc,
}

impl Scheme {
    /// All allowed schemes, in declaration order.
    pub const VALUES: [Scheme; 7] = [
        Scheme::Http,
        Scheme::Https,
        Scheme::Ftp,
        Scheme::Mailto,
        Scheme::File,
        Scheme::Data,
        Scheme::Irc,
    ];

    /// Returns the scheme as a string slice.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
            Scheme::Ftp => "ftp",
            Scheme::Mailto => "mailto",
            Scheme::File => "file",
            Scheme::Data => "data",
            Scheme::Irc => "irc",
        }
    }

    pub(crate) fn expected_list() -> String {
        let mut list = String::new();
        for (i, scheme) in Scheme::VALUES.iter().enumerate() {
            if i > 0 {
                list.push(',');
            }
            list.push_str(scheme.as_str());
        }
        list
    }

    pub(crate) fn invalid(received: &str) -> ValidationError {
        ValidationError::new(
            ValidationErrorKind::InvalidScheme,
            "Uri must have a valid scheme",
        )
        .with_received(received)
        .with_expected(Scheme::expected_list())
    }
}

impl FromStr for Scheme {
    type Err = ValidationError;

    /// Parses a scheme, ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidy_uri::{Scheme, ValidationErrorKind};
    ///
    /// assert_eq!("https".parse(), Ok(Scheme::Https));
    /// assert_eq!("HTTP".parse(), Ok(Scheme::Http));
    ///
    /// let err = "gopher".parse::<Scheme>().unwrap_err();
    /// assert_eq!(err.kind(), ValidationErrorKind::InvalidScheme);
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationError> {
        Scheme::VALUES
            .into_iter()
            .find(|scheme| scheme.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Scheme::invalid(s))
    }
}
