//! JWT token creation with a configurable TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use netadmin_core::error::AppError;
use netadmin_entity::Principal;

use super::claims::Claims;
use crate::key::SigningKey;

/// Creates signed session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token lifetime.
    ttl: chrono::Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").field("ttl", &self.ttl).finish()
    }
}

/// A freshly minted token and its validity window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    /// The compact JWT string.
    pub token: String,
    /// When the token was issued.
    pub issued_at: DateTime<Utc>,
    /// First instant at which the token is no longer accepted.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder signing with `key` and issuing tokens that live
    /// for `ttl`.
    pub fn new(key: &SigningKey, ttl: chrono::Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(key.as_bytes()),
            ttl,
        }
    }

    /// Returns the configured token lifetime.
    pub fn ttl(&self) -> chrono::Duration {
        self.ttl
    }

    /// Issues a token for `principal` starting now.
    pub fn issue(&self, principal: &Principal) -> Result<IssuedToken, AppError> {
        self.issue_at(principal, Utc::now())
    }

    /// Issues a token for `principal` as if the current time were `now`.
    ///
    /// Token timestamps have whole-second resolution, so `now` is truncated
    /// and the reported window matches the `iat` and `exp` claims exactly.
    pub fn issue_at(
        &self,
        principal: &Principal,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AppError> {
        let now = DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now);
        let claims = Claims::new(principal, now, self.ttl);

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok(IssuedToken {
            token,
            issued_at: now,
            expires_at: claims.expires_at(),
        })
    }
}
