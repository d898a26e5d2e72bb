//! Core domain entities.
//!
//! - [`Link`] - A persisted short link
//! - [`NewLink`] - Input for inserting a link

pub mod link;

pub use link::{Link, NewLink};
