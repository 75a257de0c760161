//! CLI command definitions and dispatch.

pub mod migrate;
pub mod serve;
pub mod session;
pub mod user;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use netadmin_core::config::AppConfig;
use netadmin_core::error::AppError;
use netadmin_database::DatabasePool;

/// NetAdmin: network access point administration
#[derive(Debug, Parser)]
#[command(name = "netadmin", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment; selects the `config/{env}.toml` overlay
    #[arg(short, long, env = "NETADMIN_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the NetAdmin API server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Account management
    User(user::UserArgs),
    /// Sign in to a running server and inspect the session
    Session(session::SessionArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.env).await,
            Commands::Migrate(args) => migrate::execute(args, &self.env).await,
            Commands::User(args) => user::execute(args, &self.env, self.format).await,
            Commands::Session(args) => session::execute(args, self.format).await,
        }
    }
}

/// Helper: load configuration for an environment
pub fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}

/// Helper: connect to the configured database
pub async fn connect_db(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}
