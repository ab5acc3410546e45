use sea_orm::DbErr;
use thiserror::Error;

/// Failures raised by the user store
#[derive(Debug, Error)]
pub enum UserStoreError {
    /// Another account already uses this email address
    #[error("Email already registered")]
    DuplicateEmail,

    /// Unknown email or wrong password. One variant for both so callers
    /// cannot tell the cases apart.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No user row with this id
    #[error("User {0} not found")]
    UserNotFound(i32),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("Database error during {operation}: {source}")]
    Database {
        operation: String,
        source: DbErr,
    },
}

impl UserStoreError {
    pub fn database(operation: &str, source: DbErr) -> Self {
        UserStoreError::Database {
            operation: operation.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message_does_not_name_the_cause() {
        let message = UserStoreError::InvalidCredentials.to_string();
        assert_eq!(message, "Invalid email or password");
        assert!(!message.to_lowercase().contains("email not found"));
        assert!(!message.to_lowercase().contains("wrong password"));
    }

    #[test]
    fn test_database_error_names_the_operation() {
        let err = UserStoreError::database("list_all", DbErr::Custom("boom".to_string()));
        assert!(err.to_string().contains("list_all"));
    }
}
