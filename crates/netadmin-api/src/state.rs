//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use netadmin_auth::{
    JwtDecoder, JwtEncoder, LoginService, PasswordHasher, PasswordValidator, SigningKey,
};
use netadmin_core::config::AppConfig;
use netadmin_database::{AccessPointStore, UserStore};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Auth ─────────────────────────────────────────────────
    /// Token issuance
    pub jwt_encoder: Arc<JwtEncoder>,
    /// Token validation
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hashing
    pub password_hasher: Arc<PasswordHasher>,
    /// Password policy for new accounts
    pub password_validator: Arc<PasswordValidator>,
    /// Credential-to-token login flow
    pub login_service: Arc<LoginService>,

    // ── Stores ───────────────────────────────────────────────
    /// User records
    pub users: Arc<dyn UserStore>,
    /// Access point records
    pub access_points: Arc<dyn AccessPointStore>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("jwt_encoder", &self.jwt_encoder)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Wires the auth components around `key` and the given stores.
    pub fn new(
        config: AppConfig,
        key: &SigningKey,
        password_hasher: PasswordHasher,
        users: Arc<dyn UserStore>,
        access_points: Arc<dyn AccessPointStore>,
    ) -> Self {
        let jwt_encoder = Arc::new(JwtEncoder::new(key, config.auth.token_ttl()));
        let jwt_decoder = Arc::new(JwtDecoder::new(key));
        let password_hasher = Arc::new(password_hasher);
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let login_service = Arc::new(LoginService::new(
            Arc::clone(&users),
            Arc::clone(&password_hasher),
            Arc::clone(&jwt_encoder),
        ));

        Self {
            config: Arc::new(config),
            jwt_encoder,
            jwt_decoder,
            password_hasher,
            password_validator,
            login_service,
            users,
            access_points,
        }
    }
}
