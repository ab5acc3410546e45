//! Urgency model subsystem: artifact loading, feature encoding and
//! classification.
//!
//! Both artifacts are read once at startup and immutable afterwards. Load
//! failure is not fatal to the process: the server starts with an absent
//! model and the prediction endpoint reports it as a 500 until restart.

pub mod artifact;
pub mod classifier;
pub mod encoder;

pub use artifact::{ClassifierArtifact, CompanionArtifact};
pub use encoder::RequestRecord;

use crate::config::ModelSettings;
use crate::errors::{ModelLoadError, PredictionError};

/// Confidence reported when the classifier exposes no probability interface
pub const DEFAULT_CONFIDENCE: f64 = 0.8;

/// Final prediction as reported to callers
#[derive(Debug, Clone, PartialEq)]
pub struct UrgencyPrediction {
    pub urgency: String,
    pub confidence: f64,
}

/// A fully loaded and shape-checked classifier plus companion artifact
#[derive(Debug, Clone)]
pub struct UrgencyModel {
    classifier: ClassifierArtifact,
    companion: CompanionArtifact,
}

impl UrgencyModel {
    pub fn new(
        classifier: ClassifierArtifact,
        companion: CompanionArtifact,
    ) -> Result<Self, ModelLoadError> {
        companion.validate()?;
        classifier.validate(companion.feature_len())?;
        Ok(Self {
            classifier,
            companion,
        })
    }

    /// Load both artifacts from disk and cross-check their shapes.
    pub fn load(settings: &ModelSettings) -> Result<Self, ModelLoadError> {
        let classifier: ClassifierArtifact = artifact::load_json(&settings.model_path)?;
        let companion: CompanionArtifact = artifact::load_json(&settings.feature_columns_path)?;
        Self::new(classifier, companion)
    }

    /// Run the full pipeline for one record: encode, classify, map the class
    /// to an urgency tier and attach a confidence.
    pub fn predict(&self, record: &RequestRecord) -> Result<UrgencyPrediction, PredictionError> {
        let features = encoder::encode(record, &self.companion);
        let raw = self.classifier.predict(&features)?;

        let urgency = self
            .classifier
            .classes()
            .get(raw.class_index)
            .map(artifact::ClassLabel::to_urgency)
            .ok_or_else(|| {
                PredictionError::Malformed(format!(
                    "predicted class index {} out of range",
                    raw.class_index
                ))
            })?;

        let confidence = raw
            .probabilities
            .as_deref()
            .and_then(max_probability)
            .unwrap_or(DEFAULT_CONFIDENCE);

        Ok(UrgencyPrediction {
            urgency,
            confidence: round4(confidence),
        })
    }
}

/// Process-wide model state, built once at startup and shared read-only
/// across requests. Absent when artifact loading failed.
#[derive(Debug)]
pub struct ModelState {
    model: Option<UrgencyModel>,
}

impl ModelState {
    /// Attempt the startup load. Any failure is logged and leaves the state
    /// permanently unavailable; the process still serves requests.
    pub fn load(settings: &ModelSettings) -> Self {
        match UrgencyModel::load(settings) {
            Ok(model) => {
                tracing::info!(
                    model = %settings.model_path.display(),
                    columns = %settings.feature_columns_path.display(),
                    "model and feature columns loaded successfully"
                );
                Self { model: Some(model) }
            }
            Err(err) => {
                tracing::warn!(
                    model = %settings.model_path.display(),
                    columns = %settings.feature_columns_path.display(),
                    error = %err,
                    "model loading failed; prediction endpoint will be unavailable"
                );
                Self { model: None }
            }
        }
    }

    pub fn from_model(model: UrgencyModel) -> Self {
        Self { model: Some(model) }
    }

    pub fn unavailable() -> Self {
        Self { model: None }
    }

    pub fn ready(&self) -> bool {
        self.model.is_some()
    }

    pub fn predict(&self, record: &RequestRecord) -> Result<UrgencyPrediction, PredictionError> {
        self.model
            .as_ref()
            .ok_or(PredictionError::Unavailable)?
            .predict(record)
    }
}

fn max_probability(probabilities: &[f64]) -> Option<f64> {
    probabilities
        .iter()
        .cloned()
        .fold(None, |acc, p| match acc {
            Some(best) if best >= p => Some(best),
            _ => Some(p),
        })
}

/// Round to 4 decimal places for the wire format.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
