//! # netadmin-database
//!
//! PostgreSQL connection management, the store traits the rest of the
//! workspace programs against, and their PostgreSQL and in-memory
//! implementations.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{AccessPointStore, UserStore};
