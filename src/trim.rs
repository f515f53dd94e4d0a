//! Fixed-substring trim primitives.

/// Removes at most one occurrence of `pat` from the start of `value`.
pub(crate) fn trim_start_once<'a>(value: &'a str, pat: &str) -> &'a str {
    value.strip_prefix(pat).unwrap_or(value)
}

/// Removes at most one occurrence of `pat` from the end of `value`.
pub(crate) fn trim_end_once<'a>(value: &'a str, pat: &str) -> &'a str {
    value.strip_suffix(pat).unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_start() {
        assert_eq!(trim_start_once("#fragment", "#"), "fragment");
        assert_eq!(trim_start_once("##fragment", "#"), "#fragment");
        assert_eq!(trim_start_once("fragment", "#"), "fragment");
        assert_eq!(trim_start_once("", "#"), "");
    }

    #[test]
    fn trims_end() {
        assert_eq!(trim_end_once("/users/", "/"), "/users");
        assert_eq!(trim_end_once("/users//", "/"), "/users/");
        assert_eq!(trim_end_once("/users", "/"), "/users");
        assert_eq!(trim_end_once("", "/"), "");
    }

    #[test]
    fn trims_multi_byte_patterns() {
        assert_eq!(trim_end_once("http:", ":"), "http");
        assert_eq!(trim_start_once("://host", "://"), "host");
    }
}
