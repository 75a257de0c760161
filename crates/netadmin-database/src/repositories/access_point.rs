//! PostgreSQL access point repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use netadmin_core::error::{AppError, ErrorKind};
use netadmin_core::result::AppResult;
use netadmin_entity::access_point::{AccessPoint, AccessPointStatus, CreateAccessPoint};

use super::AccessPointStore;

/// Repository for access point CRUD operations.
#[derive(Debug, Clone)]
pub struct AccessPointRepository {
    pool: PgPool,
}

impl AccessPointRepository {
    /// Create a new access point repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessPointStore for AccessPointRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AccessPoint>> {
        sqlx::query_as::<_, AccessPoint>("SELECT * FROM access_points WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find access point", e)
            })
    }

    async fn list(&self) -> AppResult<Vec<AccessPoint>> {
        sqlx::query_as::<_, AccessPoint>("SELECT * FROM access_points ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list access points", e)
            })
    }

    async fn create(&self, data: &CreateAccessPoint) -> AppResult<AccessPoint> {
        sqlx::query_as::<_, AccessPoint>(
            "INSERT INTO access_points (id, name, mac_address, location, status) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.mac_address)
        .bind(&data.location)
        .bind(AccessPointStatus::Active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("access_points_mac_address_key") =>
            {
                AppError::conflict(format!(
                    "Access point with MAC '{}' already exists",
                    data.mac_address
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create access point", e),
        })
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM access_points WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete access point", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
