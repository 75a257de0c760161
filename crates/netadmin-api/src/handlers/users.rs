//! Admin user management handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use netadmin_core::error::AppError;
use netadmin_entity::user::{CreateUser, User, UserRole};

use crate::dto::request::CreateUserRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiResult;
use crate::extractors::{AdminUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(state.users.list().await?))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    state.password_validator.validate(&req.password)?;
    let password_hash = state.password_hasher.hash_password(&req.password)?;

    let user = state
        .users
        .create(&CreateUser {
            username: req.username.trim().to_string(),
            email: req.email.trim().to_string(),
            password_hash,
            phone: req.phone,
            cpf: req.cpf,
            role: req.role.unwrap_or(UserRole::User),
        })
        .await?;

    tracing::info!(
        admin_id = %admin.subject_id,
        user_id = %user.id,
        role = %user.role,
        "User created"
    );

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<User>> {
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
    Ok(Json(user))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    if !state.users.delete(id).await? {
        return Err(AppError::not_found(format!("User {id} not found")).into());
    }

    tracing::info!(admin_id = %admin.subject_id, user_id = %id, "User deleted");

    Ok(Json(MessageResponse {
        message: "User deleted".to_string(),
    }))
}
