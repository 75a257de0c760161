//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use netadmin_entity::user::UserRole;

/// Login request body.
///
/// Field contents are not validated here: an empty email or password is just
/// another non-matching pair and is rejected as invalid credentials.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Password.
    pub password: String,
}

/// Create user request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100))]
    pub username: String,
    /// Login email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext password; the configured policy is applied by the handler.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Contact phone number.
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    /// Brazilian taxpayer registry number.
    #[validate(length(max = 14))]
    pub cpf: Option<String>,
    /// Role, defaults to `user`.
    #[serde(default)]
    pub role: Option<UserRole>,
}

/// Register access point request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAccessPointRequest {
    /// Human-readable name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Hardware address, six hex octets separated by `:` or `-`.
    pub mac_address: String,
    /// Free-form physical location.
    #[validate(length(max = 255))]
    pub location: Option<String>,
}
