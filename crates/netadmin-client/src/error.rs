//! Client error type.

use thiserror::Error;

/// Errors surfaced by the session client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server rejected the email/password pair.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No session, or the server no longer accepts the session token.
    #[error("Not authenticated")]
    Unauthenticated,

    /// The session is valid but lacks the required role.
    #[error("Access denied")]
    Forbidden,

    /// A logout or another login completed while this login was in flight;
    /// its result was discarded.
    #[error("Login superseded by a newer session change")]
    Superseded,

    /// Any other non-success response.
    #[error("Server returned {status}: {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Message from the error body.
        message: String,
    },

    /// The request never produced a response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Reading or writing the persisted token failed.
    #[error("Token storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
