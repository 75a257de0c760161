//! Convenience result type alias for NetAdmin.

use crate::error::AppError;

/// A specialized `Result` type for NetAdmin operations.
pub type AppResult<T> = Result<T, AppError>;
