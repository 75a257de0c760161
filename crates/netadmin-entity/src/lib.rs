//! # netadmin-entity
//!
//! Domain entity models for NetAdmin. Database entities derive
//! `sqlx::FromRow` when the default `sqlx` feature is enabled; the session
//! client disables it and only uses the serde side.

pub mod access_point;
pub mod principal;
pub mod user;

pub use principal::Principal;
