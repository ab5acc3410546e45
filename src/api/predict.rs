use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::errors::PredictError;
use crate::model::{ModelState, RequestRecord};
use crate::types::dto::predict::{PredictRequest, PredictResponse};

/// Urgency prediction API
pub struct PredictApi {
    model: Arc<ModelState>,
}

impl PredictApi {
    pub fn new(model: Arc<ModelState>) -> Self {
        Self { model }
    }
}

/// API tags for prediction endpoints
#[derive(Tags)]
enum PredictTags {
    /// Urgency prediction endpoints
    Prediction,
}

#[OpenApi]
impl PredictApi {
    /// Map an aid request to an urgency tier
    ///
    /// All six fields are optional; missing fields are defaulted, never
    /// rejected. Answers 500 while the model artifacts are unavailable.
    #[oai(path = "/predict", method = "post", tag = "PredictTags::Prediction")]
    async fn predict(
        &self,
        body: Json<PredictRequest>,
    ) -> Result<Json<PredictResponse>, PredictError> {
        let record = RequestRecord::from_request(&body.0);
        let prediction = self.model.predict(&record)?;

        Ok(Json(PredictResponse {
            status: "success".to_string(),
            urgency: prediction.urgency,
            confidence: prediction.confidence,
            timestamp: Utc::now().to_rfc3339(),
        }))
    }
}
