#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// URL search parameter tests
///
/// This test suite covers:
/// - Query string parsing and serialization
/// - Parameter manipulation (append, set, delete)
/// - Sorting and iteration
/// - Round trips through a URL's query
use wurl::{Url, UrlSearchParams};

fn pairs(params: &UrlSearchParams) -> Vec<(&str, &str)> {
    params.iter().collect()
}

#[test]
fn test_parse() {
    let params = UrlSearchParams::parse("?a=1&b&c=&=d&a=2");
    assert_eq!(
        pairs(&params),
        vec![("a", "1"), ("b", ""), ("c", ""), ("", "d"), ("a", "2")]
    );
    assert_eq!(params.size(), 5);
    assert!(UrlSearchParams::parse("").is_empty());
    assert!(UrlSearchParams::parse("?").is_empty());
    assert!(UrlSearchParams::parse("&&&").is_empty());
}

#[test]
fn test_parse_keeps_later_question_marks() {
    let params = UrlSearchParams::parse("??key=value?extra");
    assert_eq!(pairs(&params), vec![("?key", "value?extra")]);
}

#[test]
fn test_parse_decoding() {
    let params = UrlSearchParams::parse("q=a+b%2Bc&n%C3%A9=%E2%82%AC&bad=%&raw=%ZZ");
    assert_eq!(params.get("q"), Some("a b+c"));
    assert_eq!(params.get("n\u{e9}"), Some("\u{20ac}"));
    assert_eq!(params.get("bad"), Some("%"));
    assert_eq!(params.get("raw"), Some("%ZZ"));
}

#[test]
fn test_parse_invalid_utf8_becomes_replacement() {
    let params = UrlSearchParams::parse("k=%C3&l=%80%80");
    assert_eq!(params.get("k"), Some("\u{fffd}"));
    assert_eq!(params.get("l"), Some("\u{fffd}\u{fffd}"));
}

#[test]
fn test_serialize() {
    let mut params = UrlSearchParams::new();
    params.append("special", "!@#$%^&*()");
    params.append("keep", "*-._");
    params.append("space", "a b");
    params.append("euro", "\u{20ac}");
    assert_eq!(
        params.to_string(),
        "special=%21%40%23%24%25%5E%26*%28%29&keep=*-._&space=a+b&euro=%E2%82%AC"
    );

    let reparsed = UrlSearchParams::parse(&params.to_string());
    assert_eq!(reparsed, params);
}

#[test]
fn test_append_keeps_duplicates() {
    let mut params = UrlSearchParams::new();
    params.append("k", "1");
    params.append("k", "1");
    assert_eq!(params.get_all("k"), vec!["1", "1"]);
    assert_eq!(params.to_string(), "k=1&k=1");
}

#[test]
fn test_delete() {
    let mut params = UrlSearchParams::parse("a=1&b=2&a=3&a=1");
    params.delete("a", Some("1"));
    assert_eq!(pairs(&params), vec![("b", "2"), ("a", "3")]);

    params.delete("a", None);
    assert_eq!(pairs(&params), vec![("b", "2")]);

    params.delete("missing", None);
    assert_eq!(params.size(), 1);
}

#[test]
fn test_has() {
    let params = UrlSearchParams::parse("key=value1&key=value2&empty=");
    assert!(params.has("key", None));
    assert!(params.has("key", Some("value2")));
    assert!(!params.has("key", Some("value3")));
    assert!(params.has("empty", Some("")));
    assert!(!params.has("nonexistent", None));
}

#[test]
fn test_set() {
    let mut params = UrlSearchParams::parse("x=0&key=1&y=0&key=2&key=3");
    params.set("key", "new");
    assert_eq!(pairs(&params), vec![("x", "0"), ("key", "new"), ("y", "0")]);

    params.set("z", "appended");
    assert_eq!(params.to_string(), "x=0&key=new&y=0&z=appended");
}

#[test]
fn test_sort() {
    let mut params = UrlSearchParams::parse("z=1&a=2&z=3&=4&\u{fc}=5&a=6");
    params.sort();
    assert_eq!(
        pairs(&params),
        vec![("", "4"), ("a", "2"), ("a", "6"), ("z", "1"), ("z", "3"), ("\u{fc}", "5")]
    );
}

#[test]
fn test_sort_astral_before_bmp_private_use() {
    // Compared as UTF-16, a surrogate pair sorts below U+E000
    let mut params = UrlSearchParams::new();
    params.append("\u{e000}", "bmp");
    params.append("\u{10000}", "astral");
    params.sort();
    let keys: Vec<&str> = params.keys().collect();
    assert_eq!(keys, vec!["\u{10000}", "\u{e000}"]);
}

#[test]
fn test_iterators() {
    let params = UrlSearchParams::parse("a=1&b=2&c=3");
    assert_eq!(params.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(params.values().collect::<Vec<_>>(), vec!["1", "2", "3"]);
    assert_eq!(params.entries().count(), 3);
    assert_eq!(params.entries().nth(1), Some(("b", "2")));
}

#[test]
fn test_conversions() {
    let params = UrlSearchParams::from("?a=1");
    assert_eq!(params.get("a"), Some("1"));

    let params: UrlSearchParams = vec![("x", "1 2"), ("y", "&")].into_iter().collect();
    assert_eq!(format!("{params}"), "x=1+2&y=%26");
}

#[test]
fn test_url_round_trip() {
    let mut url = Url::parse("https://example.com/search?q=rust+url&page=2#results", None).unwrap();

    let mut params = url.search_params();
    assert_eq!(params.get("q"), Some("rust url"));
    params.set("page", "3");
    params.append("lang", "\u{65e5}\u{672c}");
    url.set_search_params(&params);

    assert_eq!(
        url.href(),
        "https://example.com/search?q=rust+url&page=3&lang=%E6%97%A5%E6%9C%AC#results"
    );
    assert_eq!(url.search_params(), params);
}

#[test]
fn test_url_without_query() {
    let url = Url::parse("https://example.com/", None).unwrap();
    assert!(url.search_params().is_empty());
}
