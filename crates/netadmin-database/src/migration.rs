//! Embedded schema migrations.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use netadmin_core::error::{AppError, ErrorKind};

/// Migrations under `migrations/` at the workspace root, compiled in.
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Brings the schema up to date. Already-applied migrations are skipped.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, format!("Migration failed: {e}"), e)
    })?;

    info!(known = MIGRATOR.iter().count(), "Schema is up to date");
    Ok(())
}
