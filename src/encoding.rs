//! Utilities for percent-encoding.
//!
//! Encoding is applied on output only: this crate never percent-decodes
//! input, so an already-encoded octet such as `%3C` passes through a parse
//! untouched and is re-escaped (`%253C`) if fed through [`encode`] again.

use alloc::borrow::Cow;
use alloc::string::String;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// A table specifying the ASCII bytes that a string may contain unencoded.
///
/// Non-ASCII bytes are never allowed; they are always escaped.
#[derive(Clone, Copy, Debug)]
pub struct Table(u128);

impl Table {
    /// Creates a table that only allows the given bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII.
    #[must_use]
    pub const fn new(mut bytes: &[u8]) -> Self {
        let mut mask = 0u128;
        while let [cur, rem @ ..] = bytes {
            assert!(cur.is_ascii(), "cannot allow a non-ASCII byte");
            mask |= 1 << *cur;
            bytes = rem;
        }
        Self(mask)
    }

    /// Creates a table that allows the ASCII alphanumeric bytes.
    #[must_use]
    pub const fn alnum() -> Self {
        let mut mask = 0u128;
        let mut x = 0u8;
        while x < 128 {
            if x.is_ascii_alphanumeric() {
                mask |= 1 << x;
            }
            x += 1;
        }
        Self(mask)
    }

    /// Combines two tables into one that allows the bytes allowed
    /// by `self` or by `other`.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Checks whether the byte is allowed unencoded.
    #[must_use]
    pub const fn allows(self, x: u8) -> bool {
        x < 128 && self.0 & (1 << x) != 0
    }
}

/// The full-URI-safe set: bytes that survive whole-URI encoding unescaped.
///
/// This is the set left alone by JavaScript's `encodeURI`: alphanumerics
/// plus `; , / ? : @ & = + $ - _ . ! ~ * ' ( ) #`. Note that the
/// structural characters `?`, `&` and `=` are in the set, so a literal
/// `&` or `=` inside a query key or value is *not* escaped.
pub const FULL_URI: Table = Table::alnum().or(Table::new(b";,/?:@&=+$-_.!~*'()#"));

/// Percent-encodes the bytes of `s` that `table` does not allow.
///
/// Returns the input unchanged (and unallocated) when every byte
/// is allowed. Escapes use uppercase hexadecimal digits.
///
/// # Examples
///
/// ```
/// use tidy_uri::encoding::{encode, FULL_URI};
///
/// assert_eq!(encode("tes<>t", FULL_URI), "tes%3C%3Et");
/// assert_eq!(encode("?key=value", FULL_URI), "?key=value");
/// ```
#[must_use]
pub fn encode(s: &str, table: Table) -> Cow<'_, str> {
    if s.bytes().all(|x| table.allows(x)) {
        return Cow::Borrowed(s);
    }

    let mut buf = String::with_capacity(s.len() + 2);
    for x in s.bytes() {
        if table.allows(x) {
            // Allowed bytes are ASCII by construction.
            buf.push(x as char);
        } else {
            buf.push('%');
            buf.push(HEX_DIGITS[(x >> 4) as usize] as char);
            buf.push(HEX_DIGITS[(x & 0xf) as usize] as char);
        }
    }
    Cow::Owned(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_listed_bytes_only() {
        let table = Table::new(b"abc");
        assert!(table.allows(b'a'));
        assert!(!table.allows(b'd'));
        assert!(!table.allows(0x80));
        assert!(!table.allows(0xff));
    }

    #[test]
    fn borrows_when_nothing_to_escape() {
        assert!(matches!(encode("a-b_c", FULL_URI), Cow::Borrowed(_)));
    }

    #[test]
    fn escapes_space_and_angle_brackets() {
        assert_eq!(encode("a b", FULL_URI), "a%20b");
        assert_eq!(encode("<>\"", FULL_URI), "%3C%3E%22");
    }

    #[test]
    fn escapes_non_ascii_as_utf8_octets() {
        assert_eq!(encode("é", FULL_URI), "%C3%A9");
        assert_eq!(encode("名", FULL_URI), "%E5%90%8D");
    }

    #[test]
    fn re_escapes_the_percent_sign() {
        // No decoding on input means encoding is not idempotent over
        // already-encoded text.
        assert_eq!(encode("%3C", FULL_URI), "%253C");
    }
}
