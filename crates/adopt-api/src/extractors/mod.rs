//! Axum extractors for request handling
//!
//! Custom extractors for authentication and JSON bodies.

mod auth;
mod json;

pub use auth::AuthUser;
pub use json::JsonBody;
