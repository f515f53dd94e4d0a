use tidy_uri::RelativeUri;

#[test]
fn empty_relative_uri_is_a_single_slash() {
    let rel = RelativeUri::new();
    assert_eq!(rel.path(), "/");
    assert_eq!(rel.fragment(), None);
    assert!(rel.query.is_empty());
    assert_eq!(rel.to_string(), "/");
}

#[test]
fn can_change_all_parts() {
    let mut rel = RelativeUri::new();
    rel.set_path("/users/2/info").unwrap();
    rel.set_fragment(Some("nice"));
    rel.query.append("sort", "descending");
    assert_eq!(rel.to_string(), "/users/2/info/?sort=descending#nice");
}

#[test]
fn parses_empty_input_to_root() {
    assert_eq!(RelativeUri::parse("").unwrap().to_string(), "/");
    assert_eq!(RelativeUri::parse("/").unwrap().to_string(), "/");
}

#[test]
fn parses_full_relative_uri() {
    let rel = RelativeUri::parse("/users/2/info/?sort=descending#nice").unwrap();
    assert_eq!(rel.path(), "/users/2/info/");
    assert_eq!(rel.query.get_value("sort"), "descending");
    assert_eq!(rel.fragment(), Some("nice"));
    assert_eq!(rel.to_string(), "/users/2/info/?sort=descending#nice");
}

#[test]
fn parses_without_leading_slash() {
    let rel = RelativeUri::parse("users/2/info/?sort=descending#nice").unwrap();
    assert_eq!(rel.to_string(), "/users/2/info/?sort=descending#nice");
}

#[test]
fn parses_absolute_input_keeping_only_the_relative_part() {
    let rel = RelativeUri::parse("http://test.com/users/?limit=10#top").unwrap();
    assert_eq!(rel.to_string(), "/users/?limit=10#top");
}

#[test]
fn path_always_starts_and_ends_with_slash() {
    for input in [
        "",
        "/",
        "//",
        "///",
        "users",
        "/users",
        "users/",
        "/users/2/info",
        "a/b/c/",
        "http://test.com/x",
        "?q=1",
        "#frag",
    ] {
        let rel = RelativeUri::parse(input).unwrap();
        assert!(rel.path().starts_with('/'), "input: {input:?}");
        assert!(rel.path().ends_with('/'), "input: {input:?}");
    }
}

#[test]
fn set_path_normalizes_slashes() {
    let mut rel = RelativeUri::new();

    rel.set_path("users").unwrap();
    assert_eq!(rel.path(), "/users/");

    rel.set_path("/users").unwrap();
    assert_eq!(rel.path(), "/users/");

    rel.set_path("users/").unwrap();
    assert_eq!(rel.path(), "/users/");

    rel.set_path("").unwrap();
    assert_eq!(rel.path(), "/");

    rel.set_path("////").unwrap();
    assert_eq!(rel.path(), "/");

    rel.set_path("a/b/c").unwrap();
    assert_eq!(rel.path(), "/a/b/c/");
}

#[test]
fn fragment_marker_is_stripped_once() {
    let mut rel = RelativeUri::new();
    rel.set_fragment(Some("#api"));
    assert_eq!(rel.fragment(), Some("api"));

    rel.set_fragment(Some("##api"));
    assert_eq!(rel.fragment(), Some("#api"));

    rel.set_fragment(None);
    assert_eq!(rel.fragment(), None);
}

#[test]
fn fragment_is_encoded_once_at_set_time() {
    let mut rel = RelativeUri::new();
    rel.set_fragment(Some("tes<>t"));
    assert_eq!(rel.fragment(), Some("tes%3C%3Et"));
    assert_eq!(rel.to_string(), "/#tes%3C%3Et");

    // Stable across reads.
    assert_eq!(rel.fragment(), Some("tes%3C%3Et"));
}

#[test]
fn bare_hash_parses_to_no_fragment() {
    let rel = RelativeUri::parse("/users/#").unwrap();
    assert_eq!(rel.fragment(), None);
    assert_eq!(rel.to_string(), "/users/");
}

#[test]
fn empty_query_contributes_nothing() {
    let rel = RelativeUri::parse("/users/?").unwrap();
    assert_eq!(rel.to_string(), "/users/");
}

#[test]
fn from_str_matches_parse() {
    let rel: RelativeUri = "/users/2/?a=1#f".parse().unwrap();
    assert_eq!(rel, RelativeUri::parse("/users/2/?a=1#f").unwrap());
}
