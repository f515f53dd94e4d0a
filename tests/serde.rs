#![cfg(feature = "serde")]

use tidy_uri::{Query, RelativeUri, Uri};

#[test]
fn uri_serializes_as_its_rendered_string() {
    let uri = Uri::parse("http://test.com/users/?limit=10#top").unwrap();
    let json = serde_json::to_string(&uri).unwrap();
    assert_eq!(json, "\"http://test.com/users/?limit=10#top\"");
}

#[test]
fn uri_deserializes_through_the_validation_gate() {
    let uri: Uri = serde_json::from_str("\"http://test.com/users/?limit=10\"").unwrap();
    assert_eq!(uri.to_string(), "http://test.com/users/?limit=10");

    let err = serde_json::from_str::<Uri>("\"http://a:b:c@test.com/\"").unwrap_err();
    assert!(err.to_string().contains("Auth cannot have more than 2 parts"));
}

#[test]
fn relative_uri_round_trips() {
    let rel = RelativeUri::parse("/users/2/info/?sort=descending#nice").unwrap();
    let json = serde_json::to_string(&rel).unwrap();
    let back: RelativeUri = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rel);
}

#[test]
fn query_round_trips() {
    let query = Query::parse("?a=1&b=2&a=3");
    let json = serde_json::to_string(&query).unwrap();
    assert_eq!(json, "\"?a=1&b=2&a=3\"");
    let back: Query = serde_json::from_str(&json).unwrap();
    assert_eq!(back, query);
}
