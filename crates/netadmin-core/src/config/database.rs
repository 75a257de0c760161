//! Database configuration.

use serde::{Deserialize, Serialize};

/// PostgreSQL connection settings. Missing keys fall back to [`Default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    pub url: String,
    /// Pool ceiling.
    pub max_connections: u32,
    /// Connections kept open while idle.
    pub min_connections: u32,
    /// How long to wait for a free connection, in seconds.
    pub connect_timeout_seconds: u64,
    /// How long an unused connection may stay open, in seconds.
    pub idle_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://netadmin@localhost:5432/netadmin".to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_seconds: 10,
            idle_timeout_seconds: 300,
        }
    }
}
