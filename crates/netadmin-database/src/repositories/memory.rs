//! In-memory stores backed by a Tokio mutex.
//!
//! Used by tests and by single-process demos that run without PostgreSQL.
//! Uniqueness rules match the database indexes.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use netadmin_core::error::AppError;
use netadmin_core::result::AppResult;
use netadmin_entity::access_point::{AccessPoint, AccessPointStatus, CreateAccessPoint};
use netadmin_entity::user::{CreateUser, User};

use super::{AccessPointStore, UserStore};

/// In-memory user store.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<Mutex<HashMap<Uuid, User>>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.lock().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().await;
        Ok(users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.users.lock().await.values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut users = self.users.lock().await;

        if users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&data.email))
        {
            return Err(AppError::conflict("Email already in use"));
        }

        let user = User {
            id: Uuid::new_v4(),
            username: data.username.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            phone: data.phone.clone(),
            cpf: data.cpf.clone(),
            role: data.role,
            created_at: Utc::now(),
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.users.lock().await.remove(&id).is_some())
    }
}

/// In-memory access point store.
#[derive(Debug, Clone, Default)]
pub struct MemoryAccessPointStore {
    access_points: Arc<Mutex<HashMap<Uuid, AccessPoint>>>,
}

impl MemoryAccessPointStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccessPointStore for MemoryAccessPointStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AccessPoint>> {
        Ok(self.access_points.lock().await.get(&id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<AccessPoint>> {
        let mut items: Vec<AccessPoint> =
            self.access_points.lock().await.values().cloned().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn create(&self, data: &CreateAccessPoint) -> AppResult<AccessPoint> {
        let mut access_points = self.access_points.lock().await;

        if access_points
            .values()
            .any(|ap| ap.mac_address == data.mac_address)
        {
            return Err(AppError::conflict(format!(
                "Access point with MAC '{}' already exists",
                data.mac_address
            )));
        }

        let access_point = AccessPoint {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            mac_address: data.mac_address.clone(),
            location: data.location.clone(),
            status: AccessPointStatus::Active,
            created_at: Utc::now(),
        };
        access_points.insert(access_point.id, access_point.clone());
        Ok(access_point)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.access_points.lock().await.remove(&id).is_some())
    }
}
