use poem_openapi::{payload::Json, ApiResponse};

use crate::errors::internal::UserStoreError;
use crate::types::dto::common::ErrorBody;

/// Wire errors for the auth and user endpoints
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// Validation failure: missing required field, invalid role or
    /// duplicate email
    #[oai(status = 400)]
    BadRequest(Json<ErrorBody>),

    /// Invalid email or password
    #[oai(status = 401)]
    Unauthorized(Json<ErrorBody>),

    /// No user with the requested id
    #[oai(status = 404)]
    NotFound(Json<ErrorBody>),

    /// Internal server error
    #[oai(status = 500)]
    Internal(Json<ErrorBody>),
}

impl AuthError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AuthError::BadRequest(Json(ErrorBody {
            error: message.into(),
        }))
    }

    /// Generic 401. Deliberately identical for unknown email and wrong
    /// password to avoid account enumeration.
    pub fn invalid_credentials() -> Self {
        AuthError::Unauthorized(Json(ErrorBody {
            error: "Invalid email or password".to_string(),
        }))
    }

    pub fn not_found(id: i32) -> Self {
        AuthError::NotFound(Json(ErrorBody {
            error: format!("User {} not found", id),
        }))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AuthError::Internal(Json(ErrorBody {
            error: message.into(),
        }))
    }
}

impl From<UserStoreError> for AuthError {
    fn from(err: UserStoreError) -> Self {
        match err {
            UserStoreError::DuplicateEmail => AuthError::bad_request(err.to_string()),
            UserStoreError::InvalidCredentials => AuthError::invalid_credentials(),
            UserStoreError::UserNotFound(id) => AuthError::not_found(id),
            UserStoreError::PasswordHash(_) | UserStoreError::Database { .. } => {
                AuthError::internal(err.to_string())
            }
        }
    }
}
