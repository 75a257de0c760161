//! The login flow: exchange an email and password for a session token.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use netadmin_core::error::AppError;
use netadmin_database::UserStore;
use netadmin_entity::Principal;

use crate::jwt::{IssuedToken, JwtEncoder};
use crate::password::PasswordHasher;

/// Result of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginOutcome {
    /// The issued token and its validity window.
    pub token: IssuedToken,
    /// The identity the token carries.
    pub principal: Principal,
    /// Display name of the account.
    pub name: String,
}

/// Verifies credentials against the user store and issues tokens.
#[derive(Clone)]
pub struct LoginService {
    /// Credential lookup.
    users: Arc<dyn UserStore>,
    /// Password verification.
    hasher: Arc<PasswordHasher>,
    /// Token issuance.
    encoder: Arc<JwtEncoder>,
}

impl std::fmt::Debug for LoginService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginService")
            .field("encoder", &self.encoder)
            .finish()
    }
}

impl LoginService {
    /// Creates a new login service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            encoder,
        }
    }

    /// Performs the login flow:
    ///
    /// 1. Look up the account by email
    /// 2. Verify the password (against a dummy hash if the account is unknown)
    /// 3. Issue a token for the account's principal
    ///
    /// An unknown email and a wrong password produce the same
    /// `InvalidCredentials` error.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let email = email.trim();

        let Some(user) = self.users.find_by_email(email).await? else {
            self.hasher.verify_dummy(password);
            warn!("Login rejected: invalid credentials");
            return Err(AppError::invalid_credentials());
        };

        if !self.hasher.verify_password(password, &user.password_hash) {
            warn!("Login rejected: invalid credentials");
            return Err(AppError::invalid_credentials());
        }

        let principal = user.principal();
        let token = self.encoder.issue(&principal)?;

        info!(user_id = %user.id, role = %user.role, "Login successful");

        Ok(LoginOutcome {
            token,
            principal,
            name: user.username,
        })
    }
}
