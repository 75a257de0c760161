//! Route handlers organized by domain.

pub mod access_points;
pub mod auth;
pub mod health;
pub mod users;
