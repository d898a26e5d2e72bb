//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::stats_handler;
use axum::{Router, routing::get};

/// Public HTML pages.
///
/// # Endpoints
///
/// - `GET /code/{code}` - Statistics page for a single link
pub fn page_routes() -> Router<AppState> {
    Router::new().route("/code/{code}", get(stats_handler))
}
