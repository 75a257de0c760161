//! Session commands: sign in to a running server with the session client.
//!
//! The token is kept in a file between invocations, so `login` followed by
//! `whoami` in a later process behaves like a reopened console.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use netadmin_client::{ClientError, FileTokenStore, HttpAuthApi, SessionClient, SessionState};
use netadmin_core::error::AppError;

/// Arguments for session commands
#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Base URL of the NetAdmin server
    #[arg(long, env = "NETADMIN_URL", default_value = "http://localhost:3001")]
    pub url: String,

    /// File holding the session token
    #[arg(long, default_value = ".netadmin/session")]
    pub token_file: PathBuf,

    /// Session subcommand
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Session subcommands
#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Sign in and store the token
    Login {
        /// Login email
        #[arg(short, long)]
        email: String,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Show the identity of the stored session
    Whoami,
    /// Discard the stored session
    Logout,
    /// List access points using the stored session
    AccessPoints,
}

/// Access point display row for table output
#[derive(Debug, Serialize, Tabled)]
struct AccessPointRow {
    name: String,
    mac_address: String,
    location: String,
    status: String,
}

/// Execute session commands
pub async fn execute(args: &SessionArgs, format: OutputFormat) -> Result<(), AppError> {
    let api = HttpAuthApi::new(&args.url).map_err(client_error)?;
    let client = SessionClient::new(
        Arc::new(api),
        Arc::new(FileTokenStore::new(args.token_file.clone())),
    );

    match &args.command {
        SessionCommand::Login { email, password } => {
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let principal = client.login(email, &password).await.map_err(client_error)?;
            output::print_success(&format!("Signed in as {}", principal.email));
        }
        SessionCommand::Whoami => match client.restore().await {
            SessionState::Authenticated { principal, .. } => {
                output::print_kv("Subject", &principal.subject_id.to_string());
                output::print_kv("Email", &principal.email);
                output::print_kv("Role", principal.role.as_str());
            }
            _ => return Err(AppError::unauthenticated("No valid session; run `session login`")),
        },
        SessionCommand::Logout => {
            client.logout().await;
            output::print_success("Signed out");
        }
        SessionCommand::AccessPoints => {
            if !client.restore().await.is_authenticated() {
                return Err(AppError::unauthenticated("No valid session; run `session login`"));
            }

            let rows: Vec<AccessPointRow> = client
                .access_points()
                .await
                .map_err(client_error)?
                .into_iter()
                .map(|ap| AccessPointRow {
                    name: ap.name,
                    mac_address: ap.mac_address,
                    location: ap.location.unwrap_or_default(),
                    status: ap.status.to_string(),
                })
                .collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}

fn client_error(err: ClientError) -> AppError {
    match err {
        ClientError::InvalidCredentials => AppError::invalid_credentials(),
        ClientError::Unauthenticated => AppError::unauthenticated(err.to_string()),
        ClientError::Forbidden => AppError::forbidden(err.to_string()),
        other => AppError::internal(other.to_string()),
    }
}
