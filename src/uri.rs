use crate::error::{ValidationError, ValidationErrorKind};
use crate::parser;
use crate::query::Query;
use crate::relative::RelativeUri;
use crate::scheme::Scheme;
use crate::trim::trim_end_once;
use alloc::format;
use alloc::string::String;
use core::str::FromStr;

/// An absolute URI: scheme, auth, hostname and port composed with a
/// [`RelativeUri`].
///
/// A `Uri` renders as
/// `scheme://[auth@]hostname[:port]/path/[?query][#fragment]`. Every
/// field is validated by the same gate on construction and on mutation,
/// and a failed operation leaves the prior state untouched. Changing
/// one field never affects another, except through [`merge`](Uri::merge)
/// which builds a fresh `Uri`.
///
/// # Examples
///
/// ```
/// use tidy_uri::{Scheme, Uri};
///
/// let mut uri = Uri::parse("http://test.com/users/2/info?lang=en#bio")?;
/// assert_eq!(uri.scheme(), Scheme::Http);
/// assert_eq!(uri.hostname(), "test.com");
/// assert_eq!(uri.path(), "/users/2/info/");
///
/// uri.set_scheme(Scheme::Https);
/// uri.set_port(Some(3001));
/// assert_eq!(uri.host(), "test.com:3001");
/// assert_eq!(
///     uri.to_string(),
///     "https://test.com:3001/users/2/info/?lang=en#bio"
/// );
/// # Ok::<_, tidy_uri::ValidationError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Uri {
    pub(crate) scheme: Scheme,
    pub(crate) auth: Option<String>,
    pub(crate) hostname: String,
    pub(crate) port: Option<u16>,
    pub(crate) relative: RelativeUri,
}

impl Uri {
    /// Parses an absolute URI string.
    ///
    /// The scheme and hostname must be present and valid; all other
    /// components have defaults. The hostname is lowercased.
    ///
    /// # Errors
    ///
    /// - [`EmptyInput`]: the string is empty.
    /// - [`InvalidScheme`]: the scheme is missing or not in the
    ///   allow-list.
    /// - [`InvalidAuth`]: the auth starts with `:` or has more than two
    ///   `:`-separated parts.
    /// - [`InvalidHost`]: the hostname is empty or there is no authority
    ///   section at all.
    /// - [`InvalidPort`]: the port text is not an integer, as in
    ///   `http://test.com:1.55/`.
    ///
    /// [`EmptyInput`]: ValidationErrorKind::EmptyInput
    /// [`InvalidScheme`]: ValidationErrorKind::InvalidScheme
    /// [`InvalidAuth`]: ValidationErrorKind::InvalidAuth
    /// [`InvalidHost`]: ValidationErrorKind::InvalidHost
    /// [`InvalidPort`]: ValidationErrorKind::InvalidPort
    pub fn parse(s: &str) -> Result<Uri, ValidationError> {
        if s.is_empty() {
            return Err(
                ValidationError::new(ValidationErrorKind::EmptyInput, "Uri can't be empty")
                    .with_received(s),
            );
        }

        let components = parser::split(s);

        let scheme = match components.scheme {
            Some(scheme) => scheme.parse::<Scheme>()?,
            None => return Err(Scheme::invalid("")),
        };

        let (auth, hostname, port) = match &components.authority {
            Some(authority) => {
                let auth = match authority.userinfo {
                    Some(userinfo) => {
                        validate_auth(userinfo)?;
                        Some(String::from(userinfo))
                    }
                    None => None,
                };
                let hostname = validate_hostname(authority.hostname)?;
                let port = match authority.port {
                    Some(text) => Some(parse_port(text)?),
                    None => None,
                };
                (auth, hostname, port)
            }
            None => return Err(host_empty("")),
        };

        let mut relative = RelativeUri::new();
        relative.set_path(components.path)?;
        relative.query = Query::parse(components.query);
        relative.set_fragment(components.fragment);

        Ok(Uri {
            scheme,
            auth,
            hostname,
            port,
            relative,
        })
    }

    /// Creates a new URI with this URI's scheme, auth, hostname and
    /// port, and with `relative` appended under this URI's relative
    /// portion.
    ///
    /// The merged path is this path (minus its trailing slash) followed
    /// by the relative path; the merged query is this query's params
    /// followed by the relative query's params; the fragment comes from
    /// `relative` alone, even when it is absent there.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidy_uri::{RelativeUri, Uri};
    ///
    /// let base = Uri::parse("http://test.com/users/?limit=10#top")?;
    /// let rel = RelativeUri::parse("/15/?sort=asc")?;
    /// assert_eq!(
    ///     base.merge(&rel).to_string(),
    ///     "http://test.com/users/15/?limit=10&sort=asc"
    /// );
    /// # Ok::<_, tidy_uri::ValidationError>(())
    /// ```
    #[must_use]
    pub fn merge(&self, relative: &RelativeUri) -> Uri {
        Uri {
            scheme: self.scheme,
            auth: self.auth.clone(),
            hostname: self.hostname.clone(),
            port: self.port,
            relative: RelativeUri {
                path: format!(
                    "{}{}",
                    trim_end_once(&self.relative.path, "/"),
                    relative.path
                ),
                query: Query::merge(&self.relative.query, &relative.query),
                fragment: relative.fragment.clone(),
            },
        }
    }

    /// Returns the scheme.
    #[must_use]
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Sets the scheme.
    ///
    /// The allow-list is enforced by the [`Scheme`] type itself; parse a
    /// string with [`Scheme::from_str`](core::str::FromStr) first to run
    /// the gate on text.
    pub fn set_scheme(&mut self, scheme: Scheme) {
        self.scheme = scheme;
    }

    /// Returns the auth component: `username` or `username:password`.
    #[must_use]
    pub fn auth(&self) -> Option<&str> {
        self.auth.as_deref()
    }

    /// Sets or clears the auth component.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidAuth`](ValidationErrorKind::InvalidAuth) when
    /// the value starts with `:` or has more than two `:`-separated
    /// parts; the prior value is kept.
    pub fn set_auth(&mut self, value: Option<&str>) -> Result<(), ValidationError> {
        if let Some(auth) = value {
            validate_auth(auth)?;
        }
        self.auth = value.map(String::from);
        Ok(())
    }

    /// Returns the hostname.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Sets the hostname.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidHost`](ValidationErrorKind::InvalidHost) when
    /// the value is empty; the prior value is kept.
    pub fn set_hostname(&mut self, value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(host_empty(value));
        }
        self.hostname = String::from(value);
        Ok(())
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Sets or clears the port.
    ///
    /// Non-integer ports are unrepresentable here by type; text such as
    /// `1.55` is rejected by [`Uri::parse`] with
    /// [`InvalidPort`](ValidationErrorKind::InvalidPort).
    pub fn set_port(&mut self, value: Option<u16>) {
        self.port = value;
    }

    /// Returns the host: the hostname followed by `:port` when a port
    /// is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidy_uri::Uri;
    ///
    /// let uri = Uri::parse("http://fake-domain.com:3001/")?;
    /// assert_eq!(uri.host(), "fake-domain.com:3001");
    /// # Ok::<_, tidy_uri::ValidationError>(())
    /// ```
    #[must_use]
    pub fn host(&self) -> String {
        match self.port {
            Some(port) => format!("{}:{}", self.hostname, port),
            None => self.hostname.clone(),
        }
    }

    /// Returns the path. It always starts and ends with `/`.
    #[must_use]
    pub fn path(&self) -> &str {
        self.relative.path()
    }

    /// Sets the path; see [`RelativeUri::set_path`].
    pub fn set_path(&mut self, value: &str) -> Result<(), ValidationError> {
        self.relative.set_path(value)
    }

    /// Returns the fragment, without its `#` marker.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.relative.fragment()
    }

    /// Sets or clears the fragment; see [`RelativeUri::set_fragment`].
    pub fn set_fragment(&mut self, value: Option<&str>) {
        self.relative.set_fragment(value);
    }

    /// Returns the query params.
    #[must_use]
    pub fn query(&self) -> &Query {
        &self.relative.query
    }

    /// Returns the query params for mutation.
    #[must_use]
    pub fn query_mut(&mut self) -> &mut Query {
        &mut self.relative.query
    }

    /// Returns the relative portion: path, query and fragment.
    #[must_use]
    pub fn relative(&self) -> &RelativeUri {
        &self.relative
    }

    /// Returns the relative portion for mutation.
    #[must_use]
    pub fn relative_mut(&mut self) -> &mut RelativeUri {
        &mut self.relative
    }
}

fn validate_auth(auth: &str) -> Result<(), ValidationError> {
    if auth.starts_with(':') {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidAuth,
            "Auth cannot start with [:]",
        )
        .with_received(auth));
    }
    if auth.split(':').count() > 2 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidAuth,
            "Auth cannot have more than 2 parts",
        )
        .with_received(auth)
        .with_expected("username:password"));
    }
    Ok(())
}

fn validate_hostname(hostname: &str) -> Result<String, ValidationError> {
    if hostname.is_empty() {
        return Err(host_empty(hostname));
    }
    Ok(hostname.to_ascii_lowercase())
}

fn host_empty(received: &str) -> ValidationError {
    ValidationError::new(ValidationErrorKind::InvalidHost, "Host cannot be empty")
        .with_received(received)
}

fn parse_port(text: &str) -> Result<u16, ValidationError> {
    text.parse().map_err(|_| {
        ValidationError::new(ValidationErrorKind::InvalidPort, "Port must be an integer")
            .with_received(text)
    })
}

impl FromStr for Uri {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, ValidationError> {
        Uri::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s: String = serde::Deserialize::deserialize(deserializer)?;
        Uri::parse(&s).map_err(serde::de::Error::custom)
    }
}
