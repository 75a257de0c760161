//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use netadmin_api::{AppState, build_app};
use netadmin_auth::{JwtEncoder, PasswordHasher, SigningKey};
use netadmin_core::config::{AppConfig, Environment};
use netadmin_database::UserStore;
use netadmin_database::repositories::{MemoryAccessPointStore, MemoryUserStore};
use netadmin_entity::Principal;
use netadmin_entity::user::{CreateUser, User, UserRole};

/// Secret shared by every test app.
pub const TEST_SECRET: &str = "integration-test-secret-integration-test";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Direct access to the user store
    pub users: MemoryUserStore,
    /// Encoder sharing the app's signing key
    pub encoder: JwtEncoder,
    /// Hasher with test-sized cost parameters
    pub hasher: PasswordHasher,
}

/// A decoded test response
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// JSON body, or `Value::Null` when empty
    pub body: Value,
}

impl TestApp {
    /// Create a new test application backed by in-memory stores
    pub fn new() -> Self {
        let mut config = AppConfig {
            environment: Environment::Test,
            ..AppConfig::default()
        };
        config.auth.jwt_secret = Some(TEST_SECRET.to_string());

        let key = SigningKey::from_config(&config.auth, config.environment)
            .expect("test secret is accepted");
        let hasher = PasswordHasher::with_cost(1024, 1).expect("valid Argon2 params");
        let users = MemoryUserStore::new();
        let encoder = JwtEncoder::new(&key, config.auth.token_ttl());

        let state = AppState::new(
            config,
            &key,
            hasher.clone(),
            Arc::new(users.clone()),
            Arc::new(MemoryAccessPointStore::new()),
        );

        Self {
            router: build_app(state),
            users,
            encoder,
            hasher,
        }
    }

    /// Seed a user directly into the store
    pub async fn create_test_user(&self, email: &str, password: &str, role: UserRole) -> User {
        self.users
            .create(&CreateUser {
                username: email.split('@').next().unwrap_or(email).to_string(),
                email: email.to_string(),
                password_hash: self.hasher.hash_password(password).unwrap(),
                phone: None,
                cpf: None,
                role,
            })
            .await
            .expect("Failed to create test user")
    }

    /// Log in through the API and return the bearer token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.body);
        response.body["token"].as_str().unwrap().to_string()
    }

    /// Mint a token directly, bypassing the login endpoint
    pub fn token_for(&self, principal: &Principal) -> String {
        self.encoder.issue(principal).unwrap().token
    }

    /// Send a request through the router
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send(request).await
    }

    /// Serve the router on an ephemeral local port and return its base URL
    pub async fn spawn(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().unwrap();
        let router = self.router.clone();

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        format!("http://{addr}")
    }

    /// Send a fully built request through the router
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}
