//! The server seam: login, token introspection, and authorized requests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use netadmin_entity::Principal;

use crate::error::ClientError;

/// A successful login as returned by `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginSession {
    /// Bearer token.
    pub token: String,
    /// First instant at which the server rejects the token.
    pub expires_at: DateTime<Utc>,
    /// Identity the token carries.
    pub principal: Principal,
    /// Display name of the account.
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct WhoAmI {
    principal: Principal,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
    #[serde(default)]
    message: String,
}

/// A request carrying the bearer token that was current when it was built.
#[derive(Debug, Clone)]
pub struct AuthorizedRequest {
    /// HTTP method.
    pub method: Method,
    /// Path below the API base, e.g. `/api/users`.
    pub path: String,
    /// Bearer token to attach.
    pub token: String,
    /// Optional JSON body.
    pub body: Option<Value>,
}

impl AuthorizedRequest {
    /// Attaches a JSON body.
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Calls the client makes against the server.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchanges credentials for a token.
    async fn login(&self, email: &str, password: &str) -> Result<LoginSession, ClientError>;

    /// Returns the principal the server recovers from `token`.
    async fn whoami(&self, token: &str) -> Result<Principal, ClientError>;

    /// Sends an authorized request and returns the JSON response body.
    async fn execute(&self, request: AuthorizedRequest) -> Result<Value, ClientError>;
}

/// [`AuthApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAuthApi {
    /// Creates a client for the server at `base_url`, e.g.
    /// `http://localhost:3001`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let url = reqwest::Url::parse(base_url)
            .map_err(|e| ClientError::Transport(format!("Invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            base_url: url.as_str().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps a non-success response to a typed error.
    async fn error_from(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let body: ErrorBody = response.json().await.unwrap_or_default();

        match status {
            StatusCode::UNAUTHORIZED if body.error == "INVALID_CREDENTIALS" => {
                ClientError::InvalidCredentials
            }
            StatusCode::UNAUTHORIZED => ClientError::Unauthenticated,
            StatusCode::FORBIDDEN => ClientError::Forbidden,
            _ => ClientError::Server {
                status: status.as_u16(),
                message: body.message,
            },
        }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, email: &str, password: &str) -> Result<LoginSession, ClientError> {
        let response = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(response.json().await?)
    }

    async fn whoami(&self, token: &str) -> Result<Principal, ClientError> {
        let response = self
            .client
            .get(self.url("/api/auth/whoami"))
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        let body: WhoAmI = response.json().await?;
        Ok(body.principal)
    }

    async fn execute(&self, request: AuthorizedRequest) -> Result<Value, ClientError> {
        let mut builder = self
            .client
            .request(request.method, self.url(&request.path))
            .bearer_auth(&request.token);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::Transport(format!("Malformed response body: {e}")))
    }
}
