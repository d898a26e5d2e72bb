//! Shared application state injected into all handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::PgLinkRepository;

/// Link service backed by the PostgreSQL store.
pub type PgLinkService = LinkService<PgLinkRepository>;

/// Application state cloned into every request.
///
/// Holds no mutable in-process state; the connection pool inside the
/// repository is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<PgLinkService>,
    /// Process start, for the liveness endpoint's uptime.
    pub started_at: Instant,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(link_service: Arc<PgLinkService>) -> Self {
        Self {
            link_service,
            started_at: Instant::now(),
        }
    }
}
