//! Handlers for link management endpoints (create, list, get, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};

use crate::api::dto::link::{CreateLinkRequest, CreateLinkResponse, DeleteResponse, LinkResponse};
use crate::application::services::link_service::DEFAULT_DISPLAY_ORIGIN;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_origin::request_origin;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/docs", "code": "docs01" }
/// ```
///
/// `code` is optional; a random 6-character code is generated when absent.
/// A body that is not valid JSON is treated as if `url` were missing.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "code": "docs01", "url": "https://example.com/docs", "shortUrl": "https://sho.rt/docs01" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid URL or code.
/// Returns 409 Conflict if the code is already taken.
pub async fn create_link_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable request body");
            CreateLinkRequest::default()
        }
    };

    let origin = request_origin(&headers).unwrap_or_else(|| DEFAULT_DISPLAY_ORIGIN.to_string());

    let created = state
        .link_service
        .create_link(request.url, request.code, &origin)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            code: created.link.code,
            url: created.link.url,
            short_url: created.short_url,
        }),
    ))
}

/// Lists every link, most recently created first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Returns a single link with its click statistics.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(&code).await?;

    Ok(Json(link.into()))
}

/// Permanently removes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Response
///
/// `200 OK` with `{ "ok": true }`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist or was already deleted.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.link_service.delete_link(&code).await?;

    Ok(Json(DeleteResponse { ok: true }))
}
