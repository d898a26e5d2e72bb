//! Request origin extraction from HTTP headers.

use axum::http::{HeaderMap, header};

/// Header set by reverse proxies to report the client-facing scheme.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Builds the request's own origin (`scheme://host[:port]`) from its headers.
///
/// The scheme comes from `X-Forwarded-Proto` when it is `http` or `https`,
/// otherwise `http`. The `Host` header is used verbatim, port included.
///
/// Returns `None` if the `Host` header is missing, empty or not valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:8080".parse().unwrap());
///
/// assert_eq!(request_origin(&headers).unwrap(), "http://sho.rt:8080");
/// ```
pub fn request_origin(headers: &HeaderMap) -> Option<String> {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|h| !h.is_empty())?;

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        // Proxies may send a comma-separated chain; the first hop is the client's.
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| v == "http" || v == "https")
        .unwrap_or_else(|| "http".to_string());

    Some(format!("{}://{}", scheme, host))
}
