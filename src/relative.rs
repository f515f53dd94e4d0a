use crate::encoding::{encode, FULL_URI};
use crate::error::{ValidationError, ValidationErrorKind};
use crate::parser;
use crate::query::Query;
use crate::trim::trim_start_once;
use alloc::format;
use alloc::string::String;
use core::str::FromStr;

/// The relative portion of a URI: path, query and fragment.
///
/// The path always starts and ends with `/` (default `/`); a bare
/// segment set through [`set_path`](RelativeUri::set_path) is wrapped
/// as `/segment/`. The query renders only when it has params, and the
/// fragment renders only when present.
///
/// # Examples
///
/// ```
/// use tidy_uri::RelativeUri;
///
/// let mut rel = RelativeUri::new();
/// rel.set_path("/users/2/info")?;
/// rel.set_fragment(Some("nice"));
/// rel.query.append("sort", "descending");
/// assert_eq!(rel.to_string(), "/users/2/info/?sort=descending#nice");
/// # Ok::<_, tidy_uri::ValidationError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelativeUri {
    pub(crate) path: String,
    /// The query params, directly mutable.
    pub query: Query,
    pub(crate) fragment: Option<String>,
}

impl Default for RelativeUri {
    fn default() -> Self {
        RelativeUri {
            path: String::from("/"),
            query: Query::new(),
            fragment: None,
        }
    }
}

impl RelativeUri {
    /// Creates a relative URI with path `/`, an empty query and no
    /// fragment.
    #[must_use]
    pub fn new() -> RelativeUri {
        RelativeUri::default()
    }

    /// Parses the relative portion of a URI string.
    ///
    /// Absolute inputs are accepted too; their scheme and authority
    /// are ignored. A missing path defaults to `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidy_uri::RelativeUri;
    ///
    /// let rel = RelativeUri::parse("users/2/info/?sort=descending#nice")?;
    /// assert_eq!(rel.to_string(), "/users/2/info/?sort=descending#nice");
    ///
    /// let rel = RelativeUri::parse("http://test.com/users/")?;
    /// assert_eq!(rel.to_string(), "/users/");
    /// # Ok::<_, tidy_uri::ValidationError>(())
    /// ```
    pub fn parse(s: &str) -> Result<RelativeUri, ValidationError> {
        let components = parser::split(s);
        let mut rel = RelativeUri::new();
        rel.set_path(components.path)?;
        rel.query = Query::parse(components.query);
        rel.set_fragment(components.fragment);
        Ok(rel)
    }

    /// Returns the path. It always starts and ends with `/`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Sets the path, normalizing the slashes.
    ///
    /// Leading and trailing slashes are stripped and the remainder is
    /// wrapped back in a single pair, so `""`, `"/"` and any run of
    /// slashes normalize to `/`, while `"users"`, `"/users"` and
    /// `"users/"` all normalize to `/users/`. Interior slashes are
    /// kept as-is.
    ///
    /// # Errors
    ///
    /// Fails with [`EmptyInput`](ValidationErrorKind::EmptyInput) if the
    /// normalized path is empty. Normalization guarantees non-emptiness,
    /// so this gate is unreachable through this method; it mirrors the
    /// construction-time check.
    pub fn set_path(&mut self, value: &str) -> Result<(), ValidationError> {
        let trimmed = value.trim_matches('/');
        let path = if trimmed.is_empty() {
            String::from("/")
        } else {
            format!("/{trimmed}/")
        };
        if path.is_empty() {
            return Err(
                ValidationError::new(ValidationErrorKind::EmptyInput, "Path cannot be empty")
                    .with_received(path),
            );
        }
        self.path = path;
        Ok(())
    }

    /// Returns the fragment, without its `#` marker.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Sets or clears the fragment.
    ///
    /// One leading `#` marker is stripped if present, and the rest is
    /// percent-encoded immediately; the stored value is returned as-is
    /// by [`fragment`](RelativeUri::fragment) on every read, so repeated
    /// reads never re-encode.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidy_uri::RelativeUri;
    ///
    /// let mut rel = RelativeUri::new();
    /// rel.set_fragment(Some("tes<>t"));
    /// assert_eq!(rel.fragment(), Some("tes%3C%3Et"));
    /// assert_eq!(rel.to_string(), "/#tes%3C%3Et");
    /// ```
    pub fn set_fragment(&mut self, value: Option<&str>) {
        self.fragment = value.map(|v| encode(trim_start_once(v, "#"), FULL_URI).into_owned());
    }
}

impl FromStr for RelativeUri {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, ValidationError> {
        RelativeUri::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RelativeUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RelativeUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s: String = serde::Deserialize::deserialize(deserializer)?;
        RelativeUri::parse(&s).map_err(serde::de::Error::custom)
    }
}
