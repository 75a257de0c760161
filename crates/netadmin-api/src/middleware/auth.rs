//! Blanket bearer-token gate for protected route groups.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::extractors::bearer_token;
use crate::state::AppState;

/// Rejects requests without a valid bearer token and attaches the
/// recovered `Principal` to the request extensions, and to the response
/// extensions for the access log.
///
/// Runs before any handler body on the routes it guards, so no handler
/// executes for an unauthenticated request.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let principal = {
        let token = bearer_token(request.headers())?;
        state.jwt_decoder.validate(token)?
    };

    tracing::debug!(user_id = %principal.subject_id, role = %principal.role, "Request authenticated");
    request.extensions_mut().insert(principal.clone());

    let mut response = next.run(request).await;
    response.extensions_mut().insert(principal);
    Ok(response)
}
