//! Top-level router configuration combining API, redirect and page routes.
//!
//! # Route Structure
//!
//! - `GET  /{code}`       - Short link redirect with click counting
//! - `GET  /healthz`      - Liveness check (no dependency probes)
//! - `GET  /code/{code}`  - Stats page for a single link
//! - `/api/links*`        - Link management REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing as trace_middleware;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routing table with all handlers and the tracing layer.
///
/// Static segments (`/healthz`, `/api`, `/code`) take priority over the
/// `/{code}` redirect route.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/healthz", get(health_handler))
        .nest("/api", api::routes::link_routes())
        .merge(web::routes::page_routes())
        .with_state(state)
        .layer(trace_middleware::layer())
}

/// Constructs the application with trailing slashes trimmed before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
