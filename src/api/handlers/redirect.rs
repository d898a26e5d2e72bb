//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL and counts the visit.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Behavior
///
/// The click counter and `last_clicked` are updated in the same store
/// statement that reads the target, so concurrent visits are all counted.
///
/// # Response
///
/// - `302 Found` with `Location` set to the target URL
/// - `404 Not Found` with a plain-text body for unknown codes
pub async fn redirect_handler(Path(code): Path<String>, State(state): State<AppState>) -> Response {
    let target = match state.link_service.redirect_and_count(&code).await {
        Ok(target) => target,
        Err(AppError::NotFound { .. }) => {
            return (StatusCode::NOT_FOUND, "Not found").into_response();
        }
        Err(e) => return e.into_response(),
    };

    match location_header(&target) {
        Some(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        None => {
            tracing::error!(code = %code, target = %target, "Stored URL cannot be used as a Location header");
            AppError::internal("Invalid redirect target", json!({ "code": code })).into_response()
        }
    }
}

/// Encodes `target` as a header value.
///
/// Targets are re-serialized through the URL parser, which strips surrounding
/// whitespace, percent-encodes the path and punycodes the host. The raw value
/// is only used when the stored URL no longer parses.
fn location_header(target: &str) -> Option<HeaderValue> {
    match Url::parse(target) {
        Ok(url) => HeaderValue::from_str(url.as_str()).ok(),
        Err(_) => HeaderValue::from_str(target).ok(),
    }
}
