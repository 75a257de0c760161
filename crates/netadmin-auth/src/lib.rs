//! # netadmin-auth
//!
//! The server half of the NetAdmin session lifecycle.
//!
//! ## Modules
//!
//! - `key`: the process-wide HMAC signing key, loaded once from configuration
//! - `jwt`: token issuance and validation
//! - `password`: Argon2id password hashing and policy enforcement
//! - `rbac`: role checks for admin-only operations
//! - `login`: the credential-to-token login flow

pub mod jwt;
pub mod key;
pub mod login;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use key::SigningKey;
pub use login::{LoginOutcome, LoginService};
pub use password::{PasswordHasher, PasswordValidator};
