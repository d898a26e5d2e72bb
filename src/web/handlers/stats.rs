//! Link statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};

use crate::application::services::link_service::DEFAULT_DISPLAY_ORIGIN;
use crate::error::AppError;
use crate::state::AppState;

/// Format used for timestamps shown on the page.
const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Template for a single link's statistics.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub code: String,
    pub short_url: String,
    pub url: String,
    pub total_clicks: i64,
    pub last_clicked: String,
    pub created_at: String,
}

/// Template shown when the code does not exist.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub code: String,
}

/// Renders the statistics page for a specific link.
///
/// # Endpoint
///
/// `GET /code/{code}`
///
/// Reads the link without counting a visit. The short URL uses the
/// configured base URL, or `http://localhost:3000` when none is set.
///
/// # Errors
///
/// Unknown codes render the not-found page with status 404; store failures
/// surface as the usual JSON 500.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = match state.link_service.get_link(&code).await {
        Ok(link) => link,
        Err(AppError::NotFound { .. }) => {
            return Ok((StatusCode::NOT_FOUND, NotFoundTemplate { code }).into_response());
        }
        Err(e) => return Err(e),
    };

    let page = StatsTemplate {
        short_url: state
            .link_service
            .short_url(&link.code, DEFAULT_DISPLAY_ORIGIN),
        last_clicked: link
            .last_clicked
            .map(format_time)
            .unwrap_or_else(|| "Never".to_string()),
        created_at: format_time(link.created_at),
        total_clicks: link.total_clicks,
        code: link.code,
        url: link.url,
    };

    Ok(page.into_response())
}

fn format_time(time: DateTime<Utc>) -> String {
    time.format(DISPLAY_TIME_FORMAT).to_string()
}
