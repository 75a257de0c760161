//! Store traits and their implementations.
//!
//! Handlers and the login flow hold `Arc<dyn UserStore>` /
//! `Arc<dyn AccessPointStore>`; the server wires in the PostgreSQL
//! repositories, tests wire in the in-memory stores.

pub mod access_point;
pub mod memory;
pub mod user;

use async_trait::async_trait;
use uuid::Uuid;

use netadmin_core::result::AppResult;
use netadmin_entity::access_point::{AccessPoint, CreateAccessPoint};
use netadmin_entity::user::{CreateUser, User};

pub use access_point::AccessPointRepository;
pub use memory::{MemoryAccessPointStore, MemoryUserStore};
pub use user::UserRepository;

/// Credential and user record access.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List all users, newest first.
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Create a new user. Fails with `Conflict` if the email is taken.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Delete a user by ID. Returns `true` if a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Access point record access.
#[async_trait]
pub trait AccessPointStore: Send + Sync + 'static {
    /// Find an access point by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AccessPoint>>;

    /// List all access points, newest first.
    async fn list(&self) -> AppResult<Vec<AccessPoint>>;

    /// Register a new access point. Fails with `Conflict` on a duplicate MAC.
    async fn create(&self, data: &CreateAccessPoint) -> AppResult<AccessPoint>;

    /// Delete an access point by ID. Returns `true` if a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
