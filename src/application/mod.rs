//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers.
//!
//! - [`services::link_service::LinkService`] - Create, get, list, delete and redirect counting

pub mod services;
