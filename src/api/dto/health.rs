//! DTOs for the liveness endpoint.

use serde::Serialize;

/// Liveness response. Reports process state only; the store is not probed.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: String,
    /// Seconds since the process started.
    pub uptime: f64,
    /// Current time, RFC 3339.
    pub timestamp: String,
}
