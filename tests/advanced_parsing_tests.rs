#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

//! Advanced URL parsing tests
//!
//! This module contains tests for advanced parsing scenarios including:
//! - Reusing a `Parser` and its override mode
//! - Query encodings other than UTF-8
//! - Per-component percent-encode sets
//! - Internationalized domain names
//! - File URL hosts

use encoding_rs::{SHIFT_JIS, UTF_16LE, WINDOWS_1252};
use wurl::{Host, ParseError, Parser, State, Url};

fn parse(input: &str, base: Option<&str>) -> Result<Url, ParseError> {
    Url::parse(input, base)
}

#[test]
fn test_parser_reuse() {
    let mut parser = Parser::new();
    let base = parser.parse("https://example.com/a/b", None).unwrap();

    let first = parser.parse("c", Some(&base)).unwrap();
    assert_eq!(first.href(), "https://example.com/a/c");
    assert!(parser.log().is_empty());

    assert!(parser.parse("http://[::1", None).is_err());
    assert!(!parser.log().is_empty());

    parser.clear();
    assert!(parser.log().is_empty());
    let second = parser.parse("/d?e", Some(&base)).unwrap();
    assert_eq!(second.href(), "https://example.com/d?e");
}

#[test]
fn test_generic_parse_and_from_str() {
    let url: Url = wurl::parse("HTTP://Example.COM", None).unwrap();
    assert_eq!(url.href(), "http://example.com/");

    let url: Url = "https://example.com/x".parse().unwrap();
    assert_eq!(url.to_string(), "https://example.com/x");
    assert_eq!(url.as_ref(), url.as_str());

    assert_eq!(
        "nope".parse::<Url>().unwrap_err(),
        ParseError::MissingSchemeNonRelativeUrl
    );
}

#[test]
fn test_join() {
    let base = parse("https://example.com/docs/guide/intro", None).unwrap();
    assert_eq!(base.join("setup").unwrap().href(), "https://example.com/docs/guide/setup");
    assert_eq!(base.join("../api").unwrap().href(), "https://example.com/docs/api");
    assert_eq!(base.join("//cdn.example.com/x").unwrap().href(), "https://cdn.example.com/x");
    assert_eq!(base.join("mailto:a@b").unwrap().href(), "mailto:a@b");

    let opaque = parse("mailto:a@b", None).unwrap();
    assert_eq!(opaque.join("#top").unwrap().href(), "mailto:a@b#top");
    assert_eq!(
        opaque.join("other").unwrap_err(),
        ParseError::MissingSchemeNonRelativeUrl
    );
}

#[test]
fn test_can_parse() {
    assert!(Url::can_parse("https://example.com", None));
    assert!(Url::can_parse("/x", Some("https://example.com")));
    assert!(!Url::can_parse("/x", None));
    assert!(!Url::can_parse("/x", Some("not a base")));
}

#[test]
fn test_parse_override_states() {
    let mut parser = Parser::new();
    let mut url = parse("http://example.com/a?b#c", None).unwrap();

    assert!(parser.parse_override("8080", &mut url, State::Port).unwrap());
    assert_eq!(url.href(), "http://example.com:8080/a?b#c");

    assert!(parser.parse_override("ws:", &mut url, State::SchemeStart).unwrap());
    assert_eq!(url.href(), "ws://example.com:8080/a?b#c");

    assert_eq!(
        parser.parse_override("a b", &mut url, State::Host),
        Err(ParseError::DomainInvalidCodePoint)
    );
    assert_eq!(url.href(), "ws://example.com:8080/a?b#c");

    // Tabs and newlines are dropped, surrounding spaces are not trimmed
    assert!(parser.parse_override("9\t0\n", &mut url, State::Port).unwrap());
    assert_eq!(url.port(), "90");
}

#[test]
fn test_query_encoding() {
    let mut parser = Parser::new();

    let url = parser
        .parse_with_encoding("http://a/\u{e9}?\u{e9}#\u{e9}", None, WINDOWS_1252)
        .unwrap();
    // Only the query follows the document encoding
    assert_eq!(url.href(), "http://a/%C3%A9?%E9#%C3%A9");

    let url = parser
        .parse_with_encoding("http://a/?\u{3042}", None, SHIFT_JIS)
        .unwrap();
    assert_eq!(url.search(), "?%82%A0");

    let url = parser
        .parse_with_encoding("http://a/?\u{65e5}", None, WINDOWS_1252)
        .unwrap();
    assert_eq!(url.search(), "?%26%2326085%3B");
}

#[test]
fn test_query_encoding_falls_back_to_utf8() {
    let mut parser = Parser::new();
    for input in ["foo://a/?\u{e9}", "ws://a/?\u{e9}", "wss://a/?\u{e9}"] {
        let url = parser.parse_with_encoding(input, None, WINDOWS_1252).unwrap();
        assert_eq!(url.search(), "?%C3%A9", "{input}");
    }

    // UTF-16 output encoding is UTF-8
    let url = parser
        .parse_with_encoding("http://a/?\u{e9}", None, UTF_16LE)
        .unwrap();
    assert_eq!(url.search(), "?%C3%A9");
}

#[test]
fn test_component_encode_sets() {
    let url = parse("http://a/{p}^`?'q'\"#`f`", None).unwrap();
    assert_eq!(url.pathname(), "/%7Bp%7D%5E%60");
    assert_eq!(url.search(), "?%27q%27%22");
    assert_eq!(url.hash(), "#%60f%60");

    // The apostrophe is only encoded in queries of special URLs
    let url = parse("foo://a/?'q'", None).unwrap();
    assert_eq!(url.search(), "?'q'");

    // Existing escapes are never re-encoded
    let url = parse("http://a/%7B%zz?%41", None).unwrap();
    assert_eq!(url.href(), "http://a/%7B%zz?%41");
}

#[test]
fn test_percent_encoded_dot_segments() {
    let url = parse("http://example.com/%2e/path", None).unwrap();
    assert_eq!(url.pathname(), "/path");

    let url = parse("http://example.com/a/b/%2E%2e/c", None).unwrap();
    assert_eq!(url.pathname(), "/a/c");

    let url = parse("http://example.com/a/.%2e", None).unwrap();
    assert_eq!(url.pathname(), "/");

    let url = parse("http://example.com/%2e%2", None).unwrap();
    assert_eq!(url.pathname(), "/%2e%2");
}

#[test]
fn test_host_normalization() {
    let url = parse("http://EX%41MPLE.com/", None).unwrap();
    assert_eq!(url.host_record(), &Host::Domain("example.com".to_string()));

    let url = parse("http://example.com.:8080/", None).unwrap();
    assert_eq!(url.host(), "example.com.:8080");

    let url = parse("foo://Ex%41MPLE/", None).unwrap();
    assert_eq!(url.host_record(), &Host::Opaque("Ex%41MPLE".to_string()));

    let url = parse("sc://\u{e9}/", None).unwrap();
    assert_eq!(url.hostname(), "%C3%A9");

    let url = parse("sc:///x", None).unwrap();
    assert_eq!(url.host_record(), &Host::Empty);
}

#[test]
fn test_forbidden_host_code_points() {
    for host in ["a b", "a<b", "a>b", "a[b", "a]b", "a^b", "a|b", "a\u{8}b"] {
        let input = format!("http://{host}/");
        assert!(parse(&input, None).is_err(), "{input:?}");
    }
    // `%` is forbidden in domains but not in opaque hosts
    assert!(parse("http://a%25b/", None).is_err());
    assert!(parse("foo://a%25b/", None).is_ok());
}

#[test]
fn test_unicode_domains() {
    let url = parse("https://\u{7dcf}\u{52d9}\u{7701}.jp/", None).unwrap();
    assert_eq!(url.href(), "https://xn--lhr645fjve.jp/");

    let url = parse("http://caf\u{e9}.fr/", None).unwrap();
    assert_eq!(url.host(), "xn--caf-dma.fr");

    let url = parse("http://XN--wgv71a.jp/", None).unwrap();
    assert_eq!(url.host(), "xn--wgv71a.jp");

    // Full-width characters map to ASCII
    let url = parse("http://\u{ff25}\u{ff38}.com/", None).unwrap();
    assert_eq!(url.host(), "ex.com");

    // Maps to the empty string
    assert_eq!(
        parse("http://\u{ad}/", None).unwrap_err(),
        ParseError::DomainToAscii
    );
}

#[test]
fn test_file_hosts() {
    assert_eq!(parse("file://localhost/x", None).unwrap().href(), "file:///x");
    assert_eq!(parse("file://LOCALHOST/x", None).unwrap().href(), "file:///x");
    assert_eq!(parse("file://server/share", None).unwrap().href(), "file://server/share");
    assert_eq!(parse("file://C:/x", None).unwrap().href(), "file:///C:/x");
    assert_eq!(parse("file:c:\\x", None).unwrap().href(), "file:///c:/x");

    let base = parse("file://host/dir/file", None).unwrap();
    assert_eq!(base.join("other").unwrap().href(), "file://host/dir/other");
    assert_eq!(base.join("/C:/y").unwrap().href(), "file://host/C:/y");
}

#[test]
fn test_search_params_view() {
    let mut url = parse("https://a/?b=2&a=1+1", None).unwrap();
    let mut params = url.search_params();
    assert_eq!(params.get("a"), Some("1 1"));

    params.sort();
    params.append("c", "x y");
    url.set_search_params(&params);
    assert_eq!(url.href(), "https://a/?a=1+1&b=2&c=x+y");

    url.set_search_params(&wurl::UrlSearchParams::new());
    assert_eq!(url.href(), "https://a/");
}
