//! Access point handlers. Any authenticated user may read; only admins may
//! register or remove.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use netadmin_core::error::AppError;
use netadmin_entity::access_point::{AccessPoint, CreateAccessPoint, normalize_mac_address};

use crate::dto::request::CreateAccessPointRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiResult;
use crate::extractors::{AdminUser, AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/access-points
pub async fn list_access_points(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<AccessPoint>>> {
    Ok(Json(state.access_points.list().await?))
}

/// GET /api/access-points/{id}
pub async fn get_access_point(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<AccessPoint>> {
    let access_point = state
        .access_points
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Access point {id} not found")))?;
    Ok(Json(access_point))
}

/// POST /api/access-points
pub async fn create_access_point(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(req): ValidatedJson<CreateAccessPointRequest>,
) -> ApiResult<(StatusCode, Json<AccessPoint>)> {
    let mac_address = normalize_mac_address(&req.mac_address)?;

    let access_point = state
        .access_points
        .create(&CreateAccessPoint {
            name: req.name.trim().to_string(),
            mac_address,
            location: req.location,
        })
        .await?;

    tracing::info!(
        admin_id = %admin.subject_id,
        access_point_id = %access_point.id,
        mac = %access_point.mac_address,
        "Access point registered"
    );

    Ok((StatusCode::CREATED, Json(access_point)))
}

/// DELETE /api/access-points/{id}
pub async fn delete_access_point(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    if !state.access_points.delete(id).await? {
        return Err(AppError::not_found(format!("Access point {id} not found")).into());
    }

    tracing::info!(admin_id = %admin.subject_id, access_point_id = %id, "Access point deleted");

    Ok(Json(MessageResponse {
        message: "Access point deleted".to_string(),
    }))
}
