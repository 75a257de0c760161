//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::UserRole;
use crate::principal::Principal;

/// An account that can sign in to the administration console.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub username: String,
    /// Login email, unique across accounts.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Brazilian taxpayer registry number.
    pub cpf: Option<String>,
    /// Account role.
    pub role: UserRole,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// The identity claims a token for this account carries.
    pub fn principal(&self) -> Principal {
        Principal {
            subject_id: self.id,
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub username: String,
    /// Login email.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Brazilian taxpayer registry number.
    pub cpf: Option<String>,
    /// Assigned role.
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_never_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            username: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            phone: None,
            cpf: None,
            role: UserRole::User,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "user");
    }

    #[test]
    fn test_principal_copies_claims() {
        let id = Uuid::new_v4();
        let user = User {
            id,
            username: "Root".to_string(),
            email: "admin@example.com".to_string(),
            password_hash: String::new(),
            phone: None,
            cpf: None,
            role: UserRole::Admin,
            created_at: Utc::now(),
        };

        let principal = user.principal();
        assert_eq!(principal.subject_id, id);
        assert_eq!(principal.email, "admin@example.com");
        assert!(principal.is_admin());
    }
}
