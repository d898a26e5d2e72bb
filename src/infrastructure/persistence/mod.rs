//! PostgreSQL repository implementations.
//!
//! - [`PgLinkRepository`] - Link storage, lookup and atomic click counting

pub mod pg_link_repository;

pub use pg_link_repository::PgLinkRepository;
