use super::*;

fn headers(value: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
    headers
}

/// Tests a well-formed bearer header yields its token.
///
/// Expected: Some("abc123")
#[test]
fn extracts_token() {
    let headers = headers("Bearer abc123");

    assert_eq!(bearer_token(&headers), Some("abc123"));
}

/// Tests the scheme is matched case-insensitively.
///
/// Expected: Some("abc123")
#[test]
fn accepts_lowercase_scheme() {
    let headers = headers("bearer abc123");

    assert_eq!(bearer_token(&headers), Some("abc123"));
}

/// Tests a missing header.
///
/// Expected: None
#[test]
fn none_without_header() {
    assert_eq!(bearer_token(&HeaderMap::new()), None);
}

/// Tests other authorization schemes are not accepted.
///
/// Expected: None
#[test]
fn none_for_basic_scheme() {
    let headers = headers("Basic dXNlcjpwYXNz");

    assert_eq!(bearer_token(&headers), None);
}

/// Tests a scheme without a token.
///
/// Expected: None
#[test]
fn none_for_empty_token() {
    assert_eq!(bearer_token(&headers("Bearer")), None);
    assert_eq!(bearer_token(&headers("Bearer    ")), None);
}
