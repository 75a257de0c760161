//! JWT token validation.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use netadmin_core::error::AppError;
use netadmin_entity::Principal;

use super::claims::Claims;
use crate::key::SigningKey;

/// Validates session tokens and recovers their principal.
///
/// Validation is pure computation over the token and the signing key. The
/// user store is never consulted, so a token for a since-deleted account is
/// accepted until it expires.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Signature and structure checks. Expiry is checked separately.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder verifying against `key`.
    pub fn new(key: &SigningKey) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is enforced by `validate_at` against an explicit clock with
        // no leeway.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(key.as_bytes()),
            validation,
        }
    }

    /// Validates a token against the current time.
    pub fn validate(&self, token: &str) -> Result<Principal, AppError> {
        self.validate_at(token, Utc::now().timestamp())
    }

    /// Validates a token as if the current time were `now` (seconds since
    /// epoch).
    pub fn validate_at(&self, token: &str, now: i64) -> Result<Principal, AppError> {
        let claims = self.decode_claims(token)?;

        if claims.is_expired_at(now) {
            debug!(sub = %claims.sub, exp = claims.exp, now, "Rejected expired token");
            return Err(AppError::unauthenticated("Token has expired"));
        }

        Ok(claims.into_principal())
    }

    /// Verifies signature and structure and returns the raw claims.
    pub fn decode_claims(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                debug!(error = %e, "Token validation failed");
                match e.kind() {
                    JwtErrorKind::InvalidSignature => {
                        AppError::unauthenticated("Invalid token signature")
                    }
                    JwtErrorKind::InvalidToken
                    | JwtErrorKind::Base64(_)
                    | JwtErrorKind::Json(_)
                    | JwtErrorKind::Utf8(_) => AppError::unauthenticated("Invalid token format"),
                    _ => AppError::unauthenticated("Invalid token"),
                }
            })?;

        Ok(token_data.claims)
    }
}
