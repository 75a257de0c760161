//! JWT claims structure carried by session tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use netadmin_entity::Principal;
use netadmin_entity::user::UserRole;

/// JWT claims payload embedded in every session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user ID.
    pub sub: Uuid,
    /// Account email at issuance time.
    pub email: String,
    /// Account role at issuance time.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Builds claims for `principal` valid from `issued_at` until
    /// `issued_at + ttl`.
    pub fn new(principal: &Principal, issued_at: DateTime<Utc>, ttl: chrono::Duration) -> Self {
        Self {
            sub: principal.subject_id,
            email: principal.email.clone(),
            role: principal.role,
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Whether the token is expired at `now` (seconds since epoch).
    ///
    /// Expiry is a hard boundary: a token is rejected at exactly `exp`.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }

    /// Drops the timing claims, leaving the identity.
    pub fn into_principal(self) -> Principal {
        Principal {
            subject_id: self.sub,
            email: self.email,
            role: self.role,
        }
    }
}
