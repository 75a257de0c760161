//! `AuthUser` and `AdminUser` extractors: pull the bearer token from the
//! Authorization header, validate it, and hand the principal to handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use netadmin_auth::rbac;
use netadmin_core::error::AppError;
use netadmin_entity::Principal;

use crate::error::ApiError;
use crate::state::AppState;

/// Returns the token from an `Authorization: Bearer <token>` header.
///
/// The scheme name is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| AppError::unauthenticated("Missing Authorization header"))?
        .to_str()
        .map_err(|_| AppError::unauthenticated("Invalid Authorization header"))?;

    let (scheme, token) = value
        .split_once(' ')
        .ok_or_else(|| AppError::unauthenticated("Invalid Authorization header format"))?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AppError::unauthenticated(
            "Authorization scheme must be Bearer",
        ));
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AppError::unauthenticated("Missing bearer token"));
    }

    Ok(token)
}

/// Authenticated principal available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl std::ops::Deref for AuthUser {
    type Target = Principal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Already validated by `require_auth` on this request.
        if let Some(principal) = parts.extensions.get::<Principal>() {
            return Ok(AuthUser(principal.clone()));
        }

        let token = bearer_token(&parts.headers)?;
        let principal = state.jwt_decoder.validate(token)?;
        parts.extensions.insert(principal.clone());

        Ok(AuthUser(principal))
    }
}

/// Authenticated principal holding the admin role.
///
/// Rejects with `Unauthenticated` when the token is missing or invalid and
/// with `Forbidden` when the role is insufficient.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Principal);

impl std::ops::Deref for AdminUser {
    type Target = Principal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(principal) = AuthUser::from_request_parts(parts, state).await?;
        rbac::require_admin(&principal)?;
        Ok(AdminUser(principal))
    }
}
