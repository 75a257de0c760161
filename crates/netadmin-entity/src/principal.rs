//! The authenticated identity recovered from a validated token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::UserRole;

/// Identity and role carried by a session token.
///
/// Rebuilt from the token on every request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// The account's user ID.
    pub subject_id: Uuid,
    /// The account's email at issuance time.
    pub email: String,
    /// The account's role at issuance time.
    pub role: UserRole,
}

impl Principal {
    /// Returns whether the principal holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
