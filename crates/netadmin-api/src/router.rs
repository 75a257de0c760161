//! Route definitions for the NetAdmin HTTP API.
//!
//! All routes are mounted under `/api`. Protected groups sit behind
//! [`require_auth`], so a request without a valid bearer token never reaches
//! a handler; admin-only handlers additionally take an `AdminUser`.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware::auth::require_auth;
use crate::middleware::logging::request_logging;
use crate::state::AppState;

/// Build the complete Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(session_routes())
        .merge(user_routes())
        .merge(access_point_routes())
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    let api_routes = Router::new()
        .merge(public_routes())
        .merge(protected);

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(request_logging))
        .with_state(state)
}

/// Unauthenticated endpoints: login and health
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/health", get(handlers::health::health))
}

/// Token introspection
fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/whoami", get(handlers::auth::whoami))
        .route("/auth/me", get(handlers::auth::whoami))
}

/// User management (admin only)
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route(
            "/users/{id}",
            get(handlers::users::get_user).delete(handlers::users::delete_user),
        )
}

/// Access points (read: any user, write: admin)
fn access_point_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/access-points",
            get(handlers::access_points::list_access_points)
                .post(handlers::access_points::create_access_point),
        )
        .route(
            "/access-points/{id}",
            get(handlers::access_points::get_access_point)
                .delete(handlers::access_points::delete_access_point),
        )
}
