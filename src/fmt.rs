use crate::encoding::{encode, FULL_URI};
use crate::{Query, RelativeUri, Scheme, Uri, ValidationError};
use alloc::string::String;
use core::fmt;

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.", self.message)?;
        if let Some(received) = &self.received {
            write!(f, " Received: [{received}]")?;
        }
        if let Some(expected) = &self.expected {
            write!(f, " Expected: [{expected}]")?;
        }
        Ok(())
    }
}

impl fmt::Display for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Query {
    /// Renders `?key1=value1&key2=value2...`, or nothing for an empty
    /// query.
    ///
    /// The whole string is percent-encoded as one unit with
    /// [`FULL_URI`], so a literal `&` or `=` inside a key or value is
    /// *not* escaped and will not survive a round-trip through
    /// [`Query::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        let mut raw = String::from("?");
        for (i, param) in self.params().iter().enumerate() {
            if i > 0 {
                raw.push('&');
            }
            raw.push_str(&param.key);
            raw.push('=');
            raw.push_str(&param.value);
        }
        f.write_str(&encode(&raw, FULL_URI))
    }
}

impl fmt::Display for RelativeUri {
    /// Renders `path`, then the query, then `#fragment` when present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())?;
        fmt::Display::fmt(&self.query, f)?;
        match self.fragment() {
            Some(fragment) if !fragment.is_empty() => write!(f, "#{fragment}"),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Uri {
    /// Renders `scheme://[auth@]host` followed by the relative portion.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://", self.scheme())?;
        match self.auth() {
            Some(auth) if !auth.is_empty() => write!(f, "{auth}@")?,
            _ => {}
        }
        f.write_str(&self.host())?;
        fmt::Display::fmt(&self.relative, f)
    }
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uri")
            .field("scheme", &self.scheme())
            .field("auth", &self.auth())
            .field("hostname", &self.hostname())
            .field("port", &self.port())
            .field("path", &self.path())
            .field("query", &self.query())
            .field("fragment", &self.fragment())
            .finish()
    }
}
