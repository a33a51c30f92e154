//! Convenience result type alias for packhook.

use crate::error::AppError;

/// A specialized `Result` type for packhook operations.
pub type AppResult<T> = Result<T, AppError>;
