//! Cross-origin policy for the public form endpoints.
//!
//! A configured allow-list is authoritative: origins on it are echoed back,
//! anything else gets no allow-origin header. Only when no list is
//! configured at all does the service fall back to a wildcard, which keeps
//! local development working without configuration.

use axum::http::{header, HeaderMap, HeaderValue};

/// Compute the allow-origin value for one request, or None when the origin
/// is not acceptable.
pub fn allow_origin(origin: Option<&str>, allowed: &[String]) -> Option<String> {
    match origin {
        Some(o) if allowed.iter().any(|a| a == o) => Some(o.to_string()),
        _ if allowed.is_empty() => Some("*".to_string()),
        _ => None,
    }
}

/// The full CORS header set attached to every response from the form
/// endpoints, preflight and otherwise.
pub fn response_headers(origin: Option<&str>, allowed: &[String]) -> HeaderMap {
    let mut headers = HeaderMap::new();

    if let Some(value) = allow_origin(origin, allowed) {
        if let Ok(value) = HeaderValue::from_str(&value) {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
        }
    }
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static("86400"),
    );

    headers
}
