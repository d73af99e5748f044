//! Axum extractors for request handling
//!
//! Custom extractors for JSON bodies and typed path parameters.

mod json;
mod path;

pub use path::UserIdPath;
pub use json::JsonBody;
