use poem_openapi::{payload::Json, ApiResponse};

use crate::errors::model::PredictionError;
use crate::types::dto::common::ErrorBody;

/// Wire error for the prediction endpoint.
///
/// Every failure in the pipeline, including the permanent model-unavailable
/// state, collapses into a single 500 carrying the error's display text.
#[derive(ApiResponse, Debug)]
pub enum PredictError {
    #[oai(status = 500)]
    Internal(Json<ErrorBody>),
}

impl PredictError {
    pub fn internal(message: impl Into<String>) -> Self {
        PredictError::Internal(Json(ErrorBody {
            error: message.into(),
        }))
    }
}

impl From<PredictionError> for PredictError {
    fn from(err: PredictionError) -> Self {
        PredictError::internal(err.to_string())
    }
}
