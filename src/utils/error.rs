//! Error Handling Utilities
//!
//! Library-level error types shared across the account service.

use thiserror::Error;

/// Main application error type that can represent errors from any feature.
///
/// Business rejections collapse into two kinds: [`AppError::Validation`] for
/// caller-correctable input (bad fields, wrong current password, duplicate
/// mobile, editing another user's address) and [`AppError::NotFound`] for
/// primary lookups that came up empty. Infrastructure failures propagate
/// unchanged; no operation retries internally.
#[derive(Error, Debug)]
pub enum AppError {
    /// Validation errors for user input and business-rule rejections
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing errors
    #[error("Password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Blacklist cache errors
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Generic internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Result type alias for operations that can return AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let error = AppError::Validation("Invalid mobile number".to_string());
        assert_eq!(error.to_string(), "Validation error: Invalid mobile number");

        let error = AppError::NotFound("User not found".to_string());
        assert_eq!(error.to_string(), "Resource not found: User not found");
    }
}
