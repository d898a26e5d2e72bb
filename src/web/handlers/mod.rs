//! Template rendering handlers.

pub mod stats;

pub use stats::stats_handler;
