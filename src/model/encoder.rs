use crate::model::artifact::{
    CompanionArtifact, FittedEncoder, CATEGORICAL_COLUMNS, NUMERIC_COLUMN,
};
use crate::types::dto::predict::PredictRequest;

/// Single-row tabular record assembled from the six request fields.
///
/// Missing fields default to the empty string; the people-affected count is
/// coerced to a non-negative float (non-numeric input becomes zero).
#[derive(Debug, Clone, PartialEq)]
pub struct RequestRecord {
    pub state: String,
    pub people_affected: f64,
    pub domain: String,
    pub resources_required: String,
    pub urgency_reason: String,
    pub timeline: String,
}

impl RequestRecord {
    pub fn from_request(request: &PredictRequest) -> Self {
        Self {
            state: request.state.clone().unwrap_or_default(),
            people_affected: coerce_people_affected(request.people_affected.as_ref()),
            domain: request.domain.clone().unwrap_or_default(),
            // Frontend sends resourceType; training data calls it ResourcesRequired
            resources_required: request.resource_type.clone().unwrap_or_default(),
            urgency_reason: request.urgency_reason.clone().unwrap_or_default(),
            timeline: request.timeline.clone().unwrap_or_default(),
        }
    }

    /// Value of a categorical training column, by column name.
    fn categorical(&self, column: &str) -> Option<&str> {
        match column {
            "State" => Some(&self.state),
            "Domain" => Some(&self.domain),
            "ResourcesRequired" => Some(&self.resources_required),
            "UrgencyReason" => Some(&self.urgency_reason),
            "Timeline" => Some(&self.timeline),
            _ => None,
        }
    }
}

/// Coerce the people-affected input (JSON number, numeric string, or absent)
/// to a non-negative float. Anything unparsable becomes 0.0.
fn coerce_people_affected(value: Option<&serde_json::Value>) -> f64 {
    let parsed = match value {
        Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };

    if parsed.is_finite() && parsed > 0.0 {
        parsed
    } else {
        0.0
    }
}

/// Encode the record into the feature row the classifier expects, using
/// whichever scheme the companion artifact implies.
pub fn encode(record: &RequestRecord, companion: &CompanionArtifact) -> Vec<f64> {
    match companion {
        CompanionArtifact::Columns(columns) => encode_one_hot(record, columns),
        CompanionArtifact::Encoder(encoder) => encode_ordinal(record, encoder),
    }
}

/// One-hot expansion reindexed against the cached training-time column list.
///
/// Each cached column is either the numeric passthrough or an indicator named
/// `<Column>_<value>`. Columns whose indicator value is absent from the
/// request fill with 0.0 and request values with no cached column are
/// discarded, which is exactly the training-side reindex semantics.
fn encode_one_hot(record: &RequestRecord, columns: &[String]) -> Vec<f64> {
    columns
        .iter()
        .map(|column| {
            if column == NUMERIC_COLUMN {
                return record.people_affected;
            }
            for field in CATEGORICAL_COLUMNS {
                if let Some(value) = column.strip_prefix(&format!("{}_", field)) {
                    let hit = record
                        .categorical(field)
                        .map(|v| v == value)
                        .unwrap_or(false);
                    return if hit { 1.0 } else { 0.0 };
                }
            }
            // Unrecognized cached column: keep the slot, fill with zero
            0.0
        })
        .collect()
}

/// Deterministic mapping through the pre-fitted ordinal encoder. Unknown
/// categories encode as -1.0, matching the encoder's training configuration.
fn encode_ordinal(record: &RequestRecord, encoder: &FittedEncoder) -> Vec<f64> {
    encoder
        .columns
        .iter()
        .map(|column| {
            if column == NUMERIC_COLUMN {
                return record.people_affected;
            }
            let value = record.categorical(column).unwrap_or("");
            encoder
                .categories
                .get(column)
                .and_then(|known| known.iter().position(|c| c == value))
                .map(|idx| idx as f64)
                .unwrap_or(-1.0)
        })
        .collect()
}
