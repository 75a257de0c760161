//! Auth handlers: login and whoami.

use axum::Json;
use axum::extract::State;

use crate::dto::request::LoginRequest;
use crate::dto::response::{LoginResponse, WhoAmIResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let outcome = state.login_service.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        token: outcome.token.token,
        expires_at: outcome.token.expires_at,
        principal: outcome.principal,
        name: outcome.name,
    }))
}

/// GET /api/auth/whoami (also served at /api/auth/me)
pub async fn whoami(AuthUser(principal): AuthUser) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse { principal })
}
