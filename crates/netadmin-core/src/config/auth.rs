//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Longest accepted token lifetime: one year.
pub const MAX_TOKEN_TTL_HOURS: u64 = 24 * 365;

/// Authentication and token configuration.
///
/// There is deliberately no default signing secret; see
/// `netadmin_auth::SigningKey::from_config` for how an absent secret is
/// handled per environment.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default)]
    pub jwt_secret: Option<String>,
    /// Token lifetime in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Minimum password length accepted when creating accounts.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl AuthConfig {
    /// Token lifetime as a `chrono::Duration`, capped at
    /// [`MAX_TOKEN_TTL_HOURS`].
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.token_ttl_hours.min(MAX_TOKEN_TTL_HOURS) as i64)
    }

    /// Rejects a token lifetime of zero or above [`MAX_TOKEN_TTL_HOURS`].
    pub fn validate(&self) -> Result<(), AppError> {
        if !(1..=MAX_TOKEN_TTL_HOURS).contains(&self.token_ttl_hours) {
            return Err(AppError::configuration(format!(
                "auth.token_ttl_hours must be between 1 and {MAX_TOKEN_TTL_HOURS}, got {}",
                self.token_ttl_hours
            )));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_hours: default_token_ttl(),
            password_min_length: default_password_min(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "****"))
            .field("token_ttl_hours", &self.token_ttl_hours)
            .field("password_min_length", &self.password_min_length)
            .finish()
    }
}

fn default_token_ttl() -> u64 {
    24
}

fn default_password_min() -> usize {
    6
}
