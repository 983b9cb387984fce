//! HTML rendering for every page of the site.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! generation with automatic escaping of dynamic values. Pages share the
//! shell in [`components`]; error pages use their own minimal shell.

pub mod components;
pub mod errors;
pub mod favorite;
pub mod home;
pub mod philosophers;
pub mod philosophies;
pub mod reading;

use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use maud::Markup;

/// Build an HTML response with security headers and a content ETag.
pub fn html_response(status: StatusCode, markup: Markup) -> Response {
    let html = markup.into_string();
    let mut headers = HeaderMap::new();

    // Content type
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    // Security headers
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(components::CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    // Pages carry per-request footer data; always revalidate.
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));

    // ETag (xxHash of content)
    let hash = xxhash_rust::xxh3::xxh3_64(html.as_bytes());
    let etag = format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()));
    if let Ok(val) = HeaderValue::from_str(&etag) {
        headers.insert(header::ETAG, val);
    }

    (status, headers, html).into_response()
}
