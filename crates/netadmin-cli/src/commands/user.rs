//! Account management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use netadmin_auth::{PasswordHasher, PasswordValidator};
use netadmin_core::error::AppError;
use netadmin_database::UserStore;
use netadmin_database::repositories::UserRepository;
use netadmin_entity::user::{CreateUser, User, UserRole};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List all accounts
    List,
    /// Create an account, e.g. the initial administrator
    Create {
        /// Display name
        #[arg(short, long)]
        username: Option<String>,
        /// Login email
        #[arg(short, long)]
        email: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
        /// Account role: `admin` or `user`
        #[arg(short, long, default_value = "user")]
        role: UserRole,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: String,
    /// Display name
    username: String,
    /// Email
    email: String,
    /// Role
    role: String,
    /// Created at
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.to_string(),
            username: u.username.clone(),
            email: u.email.clone(),
            role: u.role.to_string(),
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(args: &UserArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let db = super::connect_db(&config).await?;
    let users = UserRepository::new(db.pool().clone());

    match &args.command {
        UserCommand::List => {
            let rows: Vec<UserRow> = users.list().await?.iter().map(UserRow::from).collect();
            output::print_list(&rows, format);
        }
        UserCommand::Create {
            username,
            email,
            password,
            role,
        } => {
            let username = match username {
                Some(u) => u.clone(),
                None => prompt("Display name")?,
            };
            let email = match email {
                Some(e) => e.clone(),
                None => prompt("Email")?,
            };
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            PasswordValidator::new(&config.auth).validate(&password)?;
            let password_hash = PasswordHasher::new().hash_password(&password)?;

            let user = users
                .create(&CreateUser {
                    username,
                    email: email.trim().to_string(),
                    password_hash,
                    phone: None,
                    cpf: None,
                    role: *role,
                })
                .await?;

            output::print_success(&format!(
                "{} account '{}' created (id: {})",
                user.role, user.email, user.id
            ));
        }
    }

    db.close().await;
    Ok(())
}

fn prompt(label: &str) -> Result<String, AppError> {
    dialoguer::Input::new()
        .with_prompt(label)
        .interact_text()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}
