//! Application builder: wires router, middleware, and state into an Axum app
//! and runs it.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use netadmin_auth::{PasswordHasher, SigningKey};
use netadmin_core::config::AppConfig;
use netadmin_core::error::AppError;
use netadmin_database::DatabasePool;
use netadmin_database::migration::run_migrations;
use netadmin_database::repositories::{AccessPointRepository, UserRepository};

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Runs the NetAdmin server with the given configuration.
///
/// The signing key is resolved before anything else so that a production
/// deployment without a usable secret never opens a listener.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        environment = %config.environment,
        "Starting NetAdmin v{}",
        env!("CARGO_PKG_VERSION")
    );

    // ── Step 1: Signing key ──────────────────────────────────────
    let signing_key = SigningKey::from_config(&config.auth, config.environment)?;

    // ── Step 2: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    run_migrations(db.pool()).await?;
    tracing::info!("Database migrations complete");

    // ── Step 3: Stores and auth components ───────────────────────
    let users = Arc::new(UserRepository::new(db.pool().clone()));
    let access_points = Arc::new(AccessPointRepository::new(db.pool().clone()));

    let addr = config.server.bind_address();
    let state = AppState::new(
        config,
        &signing_key,
        PasswordHasher::new(),
        users,
        access_points,
    );

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("NetAdmin server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("NetAdmin server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
