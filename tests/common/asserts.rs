#![allow(dead_code)]

use super::headers::{has_any_cors_header, header_value};
use cors_filter_rs::{CorsOutcome, Headers};

pub fn assert_admitted(result: (CorsOutcome, Headers)) -> Headers {
    match result {
        (CorsOutcome::Actual | CorsOutcome::Preflight, headers) => headers,
        (other, _) => panic!("expected admitted request, got {:?}", other),
    }
}

pub fn assert_preflight(result: (CorsOutcome, Headers)) -> Headers {
    match result {
        (CorsOutcome::Preflight, headers) => headers,
        (other, _) => panic!("expected admitted preflight, got {:?}", other),
    }
}

pub fn assert_no_cors_headers(headers: &Headers) {
    assert!(
        !has_any_cors_header(headers),
        "expected no CORS headers, got {:?}",
        headers
    );
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        header_value(headers, name),
        Some(expected),
        "header {name} mismatch"
    );
}
