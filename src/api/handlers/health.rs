//! Handler for the liveness endpoint.

use axum::{Json, extract::State};
use chrono::{SecondsFormat, Utc};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Reports that the process is up.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// No dependency checks are made; the database is not probed.
///
/// # Response
///
/// ```json
/// { "ok": true, "version": "0.1.0", "uptime": 12.5, "timestamp": "2024-06-01T12:00:00.000Z" }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.started_at.elapsed().as_secs_f64(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
