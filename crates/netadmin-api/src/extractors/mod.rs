//! Custom Axum extractors.

pub mod auth;
pub mod json;

pub use auth::{AdminUser, AuthUser, bearer_token};
pub use json::ValidatedJson;
