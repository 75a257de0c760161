//! Argon2id password hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use tracing::warn;

use netadmin_core::error::AppError;

/// Input hashed once at construction so that lookups for unknown accounts can
/// still pay for a full verification.
const DUMMY_PASSWORD: &str = "netadmin-dummy-password";

/// Handles password hashing and verification using Argon2id.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    /// Cost parameters for new hashes. Verification uses the parameters
    /// recorded in the stored hash.
    params: Params,
    /// A valid hash with the same parameters as real ones.
    dummy_hash: Option<String>,
}

impl PasswordHasher {
    /// Creates a hasher with the Argon2 default cost parameters.
    pub fn new() -> Self {
        Self::with_params(Params::default())
    }

    /// Creates a hasher with a custom memory cost (KiB) and iteration count.
    pub fn with_cost(memory_kib: u32, iterations: u32) -> Result<Self, AppError> {
        let params = Params::new(memory_kib, iterations, Params::DEFAULT_P_COST, None)
            .map_err(|e| AppError::configuration(format!("Invalid Argon2 parameters: {e}")))?;
        Ok(Self::with_params(params))
    }

    fn with_params(params: Params) -> Self {
        let mut hasher = Self {
            params,
            dummy_hash: None,
        };
        hasher.dummy_hash = hasher.hash_password(DUMMY_PASSWORD).ok();
        hasher
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored hash.
    ///
    /// Any failure, including a malformed stored hash, yields `false`.
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "Stored password hash is malformed");
                return false;
            }
        };

        match self.argon2().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => true,
            Err(argon2::password_hash::Error::Password) => false,
            Err(e) => {
                warn!(error = %e, "Password verification failed");
                false
            }
        }
    }

    /// Runs a verification against the dummy hash and discards the result.
    pub fn verify_dummy(&self, password: &str) {
        if let Some(hash) = &self.dummy_hash {
            let _ = self.verify_password(password, hash);
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
