//! Access point entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use netadmin_core::error::AppError;

use super::status::AccessPointStatus;

/// A wireless access point managed by the console.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct AccessPoint {
    /// Unique access point identifier.
    pub id: Uuid,
    /// Human-readable name.
    pub name: String,
    /// Hardware address, normalized to lowercase colon-separated octets.
    pub mac_address: String,
    /// Free-form physical location.
    pub location: Option<String>,
    /// Operational status.
    pub status: AccessPointStatus,
    /// When the access point was registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to register a new access point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccessPoint {
    /// Human-readable name.
    pub name: String,
    /// Normalized hardware address.
    pub mac_address: String,
    /// Free-form physical location.
    pub location: Option<String>,
}

/// Parses a MAC address written as six hex octets separated by `:` or `-`
/// and returns it in lowercase colon-separated form.
pub fn normalize_mac_address(raw: &str) -> Result<String, AppError> {
    let invalid = || AppError::validation(format!("Invalid MAC address: '{raw}'"));

    let octets: Vec<&str> = raw.trim().split([':', '-']).collect();
    if octets.len() != 6 {
        return Err(invalid());
    }

    let mut normalized = Vec::with_capacity(6);
    for octet in octets {
        if octet.len() != 2 || !octet.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        normalized.push(octet.to_ascii_lowercase());
    }

    Ok(normalized.join(":"))
}
