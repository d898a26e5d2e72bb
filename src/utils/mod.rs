//! Utility functions for code generation, URL validation, and request handling.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_validator`] - Absolute http(s) URL validation
//! - [`extract_origin`] - Request origin extraction from HTTP headers

pub mod code_generator;
pub mod extract_origin;
pub mod url_validator;
