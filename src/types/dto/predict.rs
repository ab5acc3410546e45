use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Request model for urgency prediction
///
/// Every field is optional: missing categorical fields default to the empty
/// string and a missing or non-numeric people-affected count defaults to zero.
#[derive(Object, Debug, Default, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Region or state code (e.g. "TX")
    pub state: Option<String>,

    /// Number of people affected; accepts a JSON number or a numeric string
    #[oai(rename = "peopleAffected")]
    pub people_affected: Option<serde_json::Value>,

    /// Aid domain category (e.g. "Health")
    pub domain: Option<String>,

    /// Requested resource type (e.g. "Medical")
    #[oai(rename = "resourceType")]
    pub resource_type: Option<String>,

    /// Reason the request is urgent (e.g. "Outbreak")
    #[oai(rename = "urgencyReason")]
    pub urgency_reason: Option<String>,

    /// Expected timeline category (e.g. "Immediate")
    pub timeline: Option<String>,
}

/// Response model for a successful prediction
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    /// "success"
    pub status: String,

    /// Predicted urgency tier
    pub urgency: String,

    /// Classifier confidence in [0, 1], rounded to 4 decimals
    pub confidence: f64,

    /// Server time of the prediction (RFC 3339)
    pub timestamp: String,
}
