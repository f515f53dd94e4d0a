#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

//! A small URI, relative-URI and query-string value-object library.
//!
//! The crate models the parts of a [Uniform Resource Identifier] as three
//! mutable value objects:
//!
//! - [`Query`]: an ordered multi-map of `key=value` parameters;
//! - [`RelativeUri`]: path, query and fragment;
//! - [`Uri`]: scheme, auth, hostname and port on top of a [`RelativeUri`].
//!
//! [Uniform Resource Identifier]: https://en.wikipedia.org/wiki/Uniform_Resource_Identifier
//!
//! Every field is validated on construction *and* on mutation through the
//! same gate, so an instance always renders back to a well-formed string:
//!
//! ```
//! use tidy_uri::{RelativeUri, Uri};
//!
//! let mut uri = Uri::parse("http://test.com/users/?limit=10")?;
//! let rel = RelativeUri::parse("/15/?sort=asc")?;
//!
//! let merged = uri.merge(&rel);
//! assert_eq!(merged.to_string(), "http://test.com/users/15/?limit=10&sort=asc");
//!
//! uri.set_hostname("example.org")?;
//! assert_eq!(uri.to_string(), "http://example.org/users/?limit=10");
//! # Ok::<_, tidy_uri::ValidationError>(())
//! ```
//!
//! Strings are percent-encoded on output only; already-encoded input is
//! never decoded (see [`Query::parse`] and [`encoding`]).
//!
//! # Feature flags
//!
//! - `std` (default): implements [`Error`] for [`ValidationError`].
//!   Disable for `no_std` targets with `alloc`.
//! - `serde`: implements `Serialize` and `Deserialize` for [`Uri`],
//!   [`RelativeUri`] and [`Query`] as their rendered string forms.
//!
//! [`Error`]: std::error::Error

extern crate alloc;

pub mod encoding;

mod error;
mod fmt;
mod parser;
mod query;
mod relative;
mod scheme;
mod trim;
mod uri;

pub use error::{ValidationError, ValidationErrorKind};
pub use query::{Query, QueryParam};
pub use relative::RelativeUri;
pub use scheme::Scheme;
pub use uri::Uri;
