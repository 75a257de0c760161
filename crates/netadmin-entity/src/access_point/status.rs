//! Access point operational status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an access point is in service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(
    feature = "sqlx",
    sqlx(type_name = "access_point_status", rename_all = "lowercase")
)]
#[serde(rename_all = "lowercase")]
pub enum AccessPointStatus {
    /// Serving clients.
    #[default]
    Active,
    /// Registered but out of service.
    Inactive,
}

impl AccessPointStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for AccessPointStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
