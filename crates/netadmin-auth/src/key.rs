//! The HMAC signing key shared by the token issuer and validator.

use std::sync::Arc;

use argon2::password_hash::rand_core::{OsRng, RngCore};
use tracing::warn;

use netadmin_core::config::{AuthConfig, Environment};
use netadmin_core::error::AppError;

/// Minimum secret length accepted in production.
pub const MIN_SECRET_BYTES: usize = 32;

/// Length of the random key generated when no secret is configured outside
/// production.
const EPHEMERAL_KEY_BYTES: usize = 32;

/// Values that appear in sample configuration files and must never sign
/// production tokens.
const PLACEHOLDER_SECRETS: &[&str] = &[
    "CHANGE_ME_IN_PRODUCTION",
    "your-secret-key",
    "changeme",
    "secret",
];

/// Symmetric secret used to sign and verify session tokens.
///
/// Loaded once at startup and handed to [`JwtEncoder`](crate::JwtEncoder)
/// and [`JwtDecoder`](crate::JwtDecoder) constructors. Immutable afterwards.
#[derive(Clone)]
pub struct SigningKey {
    secret: Arc<[u8]>,
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("len", &self.secret.len())
            .finish()
    }
}

impl SigningKey {
    /// Wraps raw secret bytes.
    pub fn from_secret(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: Arc::from(secret.as_ref()),
        }
    }

    /// Resolves the signing key for the given environment.
    ///
    /// In production a missing, placeholder, or short secret is a
    /// configuration error and the server must not start. Elsewhere a missing
    /// secret is replaced by random bytes, so tokens do not survive a restart.
    pub fn from_config(config: &AuthConfig, environment: Environment) -> Result<Self, AppError> {
        let secret = config
            .jwt_secret
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        match secret {
            Some(secret) if environment.is_production() => {
                if PLACEHOLDER_SECRETS
                    .iter()
                    .any(|p| p.eq_ignore_ascii_case(secret))
                {
                    return Err(AppError::configuration(
                        "auth.jwt_secret is a placeholder value; set a real secret",
                    ));
                }
                if secret.len() < MIN_SECRET_BYTES {
                    return Err(AppError::configuration(format!(
                        "auth.jwt_secret must be at least {MIN_SECRET_BYTES} bytes in production"
                    )));
                }
                Ok(Self::from_secret(secret))
            }
            Some(secret) => {
                if secret.len() < MIN_SECRET_BYTES {
                    warn!(
                        environment = %environment,
                        "auth.jwt_secret is shorter than {MIN_SECRET_BYTES} bytes"
                    );
                }
                Ok(Self::from_secret(secret))
            }
            None if environment.is_production() => Err(AppError::configuration(
                "auth.jwt_secret must be set in production",
            )),
            None => {
                warn!(
                    environment = %environment,
                    "auth.jwt_secret not set; using an ephemeral random key"
                );
                Ok(Self::ephemeral())
            }
        }
    }

    /// Generates a random key from the operating system RNG.
    pub fn ephemeral() -> Self {
        let mut bytes = [0u8; EPHEMERAL_KEY_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Self::from_secret(bytes)
    }

    /// The raw secret bytes.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use netadmin_core::error::ErrorKind;

    fn config(secret: Option<&str>) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.map(String::from),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_production_requires_secret() {
        let err = SigningKey::from_config(&config(None), Environment::Production).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);

        let err =
            SigningKey::from_config(&config(Some("   ")), Environment::Production).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_production_rejects_placeholder_and_short_secrets() {
        let err = SigningKey::from_config(&config(Some("your-secret-key")), Environment::Production)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);

        let err =
            SigningKey::from_config(&config(Some("short")), Environment::Production).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_production_accepts_long_secret() {
        let secret = "k".repeat(MIN_SECRET_BYTES);
        let key = SigningKey::from_config(&config(Some(&secret)), Environment::Production).unwrap();
        assert_eq!(key.as_bytes(), secret.as_bytes());
    }

    #[test]
    fn test_development_generates_distinct_ephemeral_keys() {
        let a = SigningKey::from_config(&config(None), Environment::Development).unwrap();
        let b = SigningKey::from_config(&config(None), Environment::Development).unwrap();
        assert_eq!(a.as_bytes().len(), EPHEMERAL_KEY_BYTES);
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_debug_hides_secret() {
        let key = SigningKey::from_secret("top-secret-value");
        assert!(!format!("{key:?}").contains("top-secret"));
    }
}
