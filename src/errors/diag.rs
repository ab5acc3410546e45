use poem_openapi::{payload::Json, ApiResponse};

use crate::errors::internal::UserStoreError;
use crate::types::dto::common::ErrorBody;

/// Wire error for the diagnostic endpoints
#[derive(ApiResponse, Debug)]
pub enum DiagError {
    #[oai(status = 500)]
    Internal(Json<ErrorBody>),
}

impl From<UserStoreError> for DiagError {
    fn from(err: UserStoreError) -> Self {
        DiagError::Internal(Json(ErrorBody {
            error: err.to_string(),
        }))
    }
}
