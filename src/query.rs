use crate::trim::trim_start_once;
use alloc::string::String;
use alloc::vec::Vec;

/// A single `key=value` query parameter.
///
/// Keys are not unique: a query may carry several params with the
/// same key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryParam {
    /// The parameter key, with its original casing.
    pub key: String,
    /// The parameter value.
    pub value: String,
}

/// An ordered multi-map of query parameters.
///
/// Insertion order is preserved and observable: serialization renders
/// the params in sequence order, with duplicate keys repeated. Key
/// lookup is ASCII-case-insensitive while storage keeps the original
/// casing.
///
/// # Examples
///
/// ```
/// use tidy_uri::Query;
///
/// let mut query = Query::new();
/// query.append("redirectUrl", "none");
/// query.append("test", "5");
/// query.append("test", "43");
///
/// assert_eq!(query.to_string(), "?redirectUrl=none&test=5&test=43");
/// assert_eq!(query.get_value("test"), "5,43");
///
/// query.delete("test");
/// assert_eq!(query.params().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<QueryParam>,
}

impl Query {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Query {
        Query::default()
    }

    /// Parses a query string, with or without a leading `?`.
    ///
    /// Params split on `&` (empty segments are skipped) and each param
    /// splits at its first `=`; a param without `=` gets an empty value.
    /// Duplicate keys are preserved in order, and the empty string
    /// parses to an empty query.
    ///
    /// No percent-decoding is performed, and `+` is *not* treated as a
    /// space: octets arrive in the params exactly as they appear in the
    /// input.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidy_uri::Query;
    ///
    /// let query = Query::parse("?name=bond&name=james");
    /// assert_eq!(query.get_value("name"), "bond,james");
    ///
    /// assert_eq!(Query::parse("a+b=c%20d").get_value("a+b"), "c%20d");
    /// assert!(Query::parse("").is_empty());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Query {
        let mut query = Query::new();
        for piece in trim_start_once(s, "?").split('&') {
            if piece.is_empty() {
                continue;
            }
            let (key, value) = piece.split_once('=').unwrap_or((piece, ""));
            query.append(key, value);
        }
        query
    }

    /// Creates a new query from two queries, with all of `a`'s params
    /// in order followed by all of `b`'s params in order.
    ///
    /// Nothing is deduplicated.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidy_uri::Query;
    ///
    /// let a = Query::parse("k1=val1&k2=val2");
    /// let b = Query::parse("k3=val3&k1=val5");
    /// let merged = Query::merge(&a, &b);
    /// assert_eq!(merged.to_string(), "?k1=val1&k2=val2&k3=val3&k1=val5");
    /// ```
    #[must_use]
    pub fn merge(a: &Query, b: &Query) -> Query {
        let mut params = Vec::with_capacity(a.params.len() + b.params.len());
        params.extend_from_slice(&a.params);
        params.extend_from_slice(&b.params);
        Query { params }
    }

    /// Appends a param at the end of the sequence.
    ///
    /// Unlike [`set`](Query::set), existing params with the same key
    /// are kept.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.push(QueryParam {
            key: key.into(),
            value: value.into(),
        });
    }

    /// Sets the only param for a key.
    ///
    /// All existing params whose key matches case-insensitively are
    /// removed, then the new param is appended at the end of the
    /// sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidy_uri::Query;
    ///
    /// let mut query = Query::parse("tag=a&x=1&TAG=b");
    /// query.set("tag", "c");
    /// assert_eq!(query.to_string(), "?x=1&tag=c");
    /// ```
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.delete(&key);
        self.append(key, value);
    }

    /// Returns the unique keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        let mut seen: Vec<&str> = Vec::new();
        self.params.iter().filter_map(move |param| {
            if seen.contains(&param.key.as_str()) {
                None
            } else {
                seen.push(&param.key);
                Some(param.key.as_str())
            }
        })
    }

    /// Returns the params whose key matches `key` case-insensitively,
    /// in sequence order.
    pub fn get<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a QueryParam> {
        self.params
            .iter()
            .filter(move |param| param.key.eq_ignore_ascii_case(key))
    }

    /// Returns the values for `key` joined with `,`, or the empty
    /// string when the key is absent.
    ///
    /// The joined form is lossy when a value itself contains a literal
    /// `,`; use [`get`](Query::get) for a lossless view.
    #[must_use]
    pub fn get_value(&self, key: &str) -> String {
        let mut joined = String::new();
        for (i, param) in self.get(key).enumerate() {
            if i > 0 {
                joined.push(',');
            }
            joined.push_str(&param.value);
        }
        joined
    }

    /// Returns the full ordered param sequence.
    #[must_use]
    pub fn params(&self) -> &[QueryParam] {
        &self.params
    }

    /// Removes all params whose key matches `key` case-insensitively.
    pub fn delete(&mut self, key: &str) {
        self.params
            .retain(|param| !param.key.eq_ignore_ascii_case(key));
    }

    /// Removes all params.
    pub fn clear(&mut self) {
        self.params.clear();
    }

    /// Returns the number of params.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Checks whether the query has no params.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Query {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Query {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s: String = serde::Deserialize::deserialize(deserializer)?;
        Ok(Query::parse(&s))
    }
}
