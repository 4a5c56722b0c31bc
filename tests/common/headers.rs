#![allow(dead_code)]

use cors_filter_rs::Headers;
use cors_filter_rs::constants::header;

pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    header_value(headers, name).is_some()
}

pub fn has_any_cors_header(headers: &Headers) -> bool {
    header::EMITTED.iter().any(|name| has_header(headers, name))
}

/// Compares two comma separated lists ignoring order and surrounding whitespace.
pub fn contains_only(actual: &str, expected: &str) -> bool {
    let mut a: Vec<_> = actual.split(',').map(str::trim).collect();
    let mut b: Vec<_> = expected.split(',').map(str::trim).collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
