//! Target URL validation.
//!
//! Only absolute `http` and `https` URLs are accepted. The URL is stored
//! exactly as supplied; nothing is normalized.

use url::Url;

/// Reasons a target URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is required")]
    Missing,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Checks that `input` parses as an absolute http(s) URL.
///
/// # Errors
///
/// - [`UrlValidationError::Missing`] for an empty string
/// - [`UrlValidationError::InvalidFormat`] for relative or malformed input
/// - [`UrlValidationError::UnsupportedProtocol`] for schemes such as
///   `ftp:` or `javascript:`
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Missing);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(UrlValidationError::UnsupportedProtocol),
    }
}

/// Returns true iff `input` is an absolute http(s) URL.
pub fn is_valid_url(input: &str) -> bool {
    validate_url(input).is_ok()
}
