//! The client session state machine.
//!
//! ```text
//! Unknown ──restore──▶ Authenticated ◀──login── Unauthenticated
//!    │                      │                         ▲
//!    └──restore (no/invalid token)──▶ Unauthenticated ◀┘ logout / 401
//! ```
//!
//! Every transition happens under one async mutex and bumps a generation
//! counter. Calls that await the server capture the generation first and
//! apply their result only if it is unchanged, so a logout issued while a
//! login is in flight always wins.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use netadmin_entity::Principal;
use netadmin_entity::access_point::AccessPoint;
use netadmin_entity::user::User;

use crate::api::{AuthApi, AuthorizedRequest};
use crate::error::ClientError;
use crate::route::Route;
use crate::store::TokenStore;

/// Where the client stands with the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Process start, before a stored token has been checked.
    Unknown,
    /// Holding a token the server accepted.
    Authenticated {
        /// Bearer token attached to outbound requests.
        token: String,
        /// Identity the token carries.
        principal: Principal,
    },
    /// No usable token.
    Unauthenticated,
}

impl SessionState {
    /// Whether the session holds an accepted token.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// The current principal, if authenticated.
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Self::Authenticated { principal, .. } => Some(principal),
            _ => None,
        }
    }

    /// The current token, if authenticated.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Inner {
    state: SessionState,
    generation: u64,
    route: Route,
}

impl Inner {
    fn transition(&mut self, state: SessionState, route: Route) {
        self.state = state;
        self.route = route;
        self.generation += 1;
    }
}

/// Client-resident session holder.
///
/// Cheap to clone; clones share the same session.
#[derive(Clone)]
pub struct SessionClient {
    api: Arc<dyn AuthApi>,
    store: Arc<dyn TokenStore>,
    inner: Arc<Mutex<Inner>>,
}

impl std::fmt::Debug for SessionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionClient").finish_non_exhaustive()
    }
}

impl SessionClient {
    /// Creates a client in the `Unknown` state, showing the login view.
    pub fn new(api: Arc<dyn AuthApi>, store: Arc<dyn TokenStore>) -> Self {
        Self {
            api,
            store,
            inner: Arc::new(Mutex::new(Inner {
                state: SessionState::Unknown,
                generation: 0,
                route: Route::Login,
            })),
        }
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> SessionState {
        self.inner.lock().await.state.clone()
    }

    /// The view currently shown.
    pub async fn route(&self) -> Route {
        self.inner.lock().await.route
    }

    /// Checks the stored token with the server.
    ///
    /// A token the server accepts makes the session `Authenticated`. Any
    /// failure discards the stored token and shows the login view.
    pub async fn restore(&self) -> SessionState {
        let (generation, stored) = {
            let inner = self.inner.lock().await;
            let stored = self.store.load().unwrap_or_else(|e| {
                warn!(error = %e, "Failed to read stored token");
                None
            });
            (inner.generation, stored)
        };

        let Some(token) = stored else {
            let mut inner = self.inner.lock().await;
            if inner.generation == generation {
                inner.transition(SessionState::Unauthenticated, Route::Login);
            }
            return inner.state.clone();
        };

        let result = self.api.whoami(&token).await;

        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            debug!("Session changed while restoring; keeping the newer state");
            return inner.state.clone();
        }

        match result {
            Ok(principal) => {
                info!(user_id = %principal.subject_id, "Restored stored session");
                let route = match inner.route {
                    Route::Login => Route::Dashboard,
                    other => other,
                };
                inner.transition(SessionState::Authenticated { token, principal }, route);
            }
            Err(e) => {
                warn!(error = %e, "Stored token rejected; signing out");
                self.clear_store();
                inner.transition(SessionState::Unauthenticated, Route::Login);
            }
        }

        inner.state.clone()
    }

    /// Exchanges credentials for a session.
    ///
    /// On success the token is persisted and the dashboard is shown. On
    /// failure an `Unknown` session becomes `Unauthenticated`; any other
    /// state is left as it was. If the session changed while the
    /// server was answering, the result is discarded and
    /// [`ClientError::Superseded`] is returned.
    pub async fn login(&self, email: &str, password: &str) -> Result<Principal, ClientError> {
        let generation = self.inner.lock().await.generation;

        let result = self.api.login(email, password).await;

        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            debug!("Discarding login result; session changed while it was in flight");
            return Err(ClientError::Superseded);
        }

        let session = match result {
            Ok(session) => session,
            Err(e) => {
                // A failed first attempt settles the session; an existing one
                // is left alone.
                if inner.state == SessionState::Unknown {
                    inner.transition(SessionState::Unauthenticated, Route::Login);
                }
                return Err(e);
            }
        };
        self.store.save(&session.token)?;

        info!(user_id = %session.principal.subject_id, "Signed in");
        inner.transition(
            SessionState::Authenticated {
                token: session.token,
                principal: session.principal.clone(),
            },
            Route::Dashboard,
        );

        Ok(session.principal)
    }

    /// Ends the session and shows the login view. Never fails.
    pub async fn logout(&self) {
        let mut inner = self.inner.lock().await;
        self.clear_store();
        inner.transition(SessionState::Unauthenticated, Route::Login);
        info!("Signed out");
    }

    /// Navigates to `target`, redirecting to the login view when the target
    /// is protected and the session is not authenticated. Returns the view
    /// actually shown.
    pub async fn navigate(&self, target: Route) -> Route {
        let mut inner = self.inner.lock().await;
        let shown = target.guard(inner.state.is_authenticated());
        inner.route = shown;
        shown
    }

    /// Builds a request carrying the current token.
    pub async fn authorized(
        &self,
        method: Method,
        path: &str,
    ) -> Result<AuthorizedRequest, ClientError> {
        let inner = self.inner.lock().await;
        let token = inner.state.token().ok_or(ClientError::Unauthenticated)?;

        Ok(AuthorizedRequest {
            method,
            path: path.to_string(),
            token: token.to_string(),
            body: None,
        })
    }

    /// Sends an authorized request.
    ///
    /// A 401 for the token the session still holds ends the session. A 403
    /// is returned as [`ClientError::Forbidden`] and leaves the session
    /// intact.
    pub async fn send(&self, request: AuthorizedRequest) -> Result<Value, ClientError> {
        let token = request.token.clone();

        match self.api.execute(request).await {
            Err(ClientError::Unauthenticated) => {
                let mut inner = self.inner.lock().await;
                if inner.state.token() == Some(token.as_str()) {
                    warn!("Server rejected the session token; signing out");
                    self.clear_store();
                    inner.transition(SessionState::Unauthenticated, Route::Login);
                }
                Err(ClientError::Unauthenticated)
            }
            other => other,
        }
    }

    /// `GET`s `path` and decodes the JSON body.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let request = self.authorized(Method::GET, path).await?;
        let value = self.send(request).await?;
        serde_json::from_value(value)
            .map_err(|e| ClientError::Transport(format!("Malformed response body: {e}")))
    }

    /// Lists users (admin only).
    pub async fn users(&self) -> Result<Vec<User>, ClientError> {
        self.fetch("/api/users").await
    }

    /// Lists access points.
    pub async fn access_points(&self) -> Result<Vec<AccessPoint>, ClientError> {
        self.fetch("/api/access-points").await
    }

    fn clear_store(&self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear stored token");
        }
    }
}
