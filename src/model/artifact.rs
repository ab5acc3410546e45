use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::errors::ModelLoadError;

/// Name of the single numeric input column
pub const NUMERIC_COLUMN: &str = "PeopleAffected";

/// Categorical input columns, in training order
pub const CATEGORICAL_COLUMNS: [&str; 5] = [
    "State",
    "Domain",
    "ResourcesRequired",
    "UrgencyReason",
    "Timeline",
];

/// Class label as stored in the classifier artifact.
///
/// The two training generations disagree on label format: one stores integer
/// class ids, the other stores raw label strings. Both are accepted and the
/// artifact decides which mapping applies.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ClassLabel {
    Id(i64),
    Name(String),
}

impl ClassLabel {
    /// Map a class label to its wire urgency tier.
    ///
    /// Integer ids follow the fixed 0/1/2 map with UNKNOWN for anything
    /// else; string labels pass through upper-cased.
    pub fn to_urgency(&self) -> String {
        match self {
            ClassLabel::Id(0) => "LOW".to_string(),
            ClassLabel::Id(1) => "MEDIUM".to_string(),
            ClassLabel::Id(2) => "HIGH".to_string(),
            ClassLabel::Id(_) => "UNKNOWN".to_string(),
            ClassLabel::Name(name) => name.to_uppercase(),
        }
    }
}

/// Node of a serialized decision tree. Children are indices into the
/// artifact's node list; a sample goes left when `feature <= threshold`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class: usize,
    },
}

/// Serialized classifier produced by the offline training script.
///
/// `linear` models expose class probabilities (softmax over the decision
/// scores); `tree` models expose none, so prediction falls back to the fixed
/// default confidence.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ClassifierArtifact {
    Linear {
        classes: Vec<ClassLabel>,
        coefficients: Vec<Vec<f64>>,
        intercepts: Vec<f64>,
    },
    Tree {
        classes: Vec<ClassLabel>,
        nodes: Vec<TreeNode>,
    },
}

impl ClassifierArtifact {
    pub fn classes(&self) -> &[ClassLabel] {
        match self {
            ClassifierArtifact::Linear { classes, .. } => classes,
            ClassifierArtifact::Tree { classes, .. } => classes,
        }
    }

    /// Check the artifact is internally consistent and agrees with the
    /// companion artifact on feature count. Runs once at load time so the
    /// request path can trust the shape.
    pub fn validate(&self, n_features: usize) -> Result<(), ModelLoadError> {
        if self.classes().is_empty() {
            return Err(ModelLoadError::Shape(
                "classifier artifact has no classes".to_string(),
            ));
        }

        match self {
            ClassifierArtifact::Linear {
                classes,
                coefficients,
                intercepts,
            } => {
                if coefficients.len() != classes.len() {
                    return Err(ModelLoadError::Shape(format!(
                        "{} coefficient rows for {} classes",
                        coefficients.len(),
                        classes.len()
                    )));
                }
                if intercepts.len() != classes.len() {
                    return Err(ModelLoadError::Shape(format!(
                        "{} intercepts for {} classes",
                        intercepts.len(),
                        classes.len()
                    )));
                }
                for row in coefficients {
                    if row.len() != n_features {
                        return Err(ModelLoadError::Shape(format!(
                            "coefficient row has {} entries, companion artifact encodes {} features",
                            row.len(),
                            n_features
                        )));
                    }
                }
                Ok(())
            }
            ClassifierArtifact::Tree { classes, nodes } => {
                if nodes.is_empty() {
                    return Err(ModelLoadError::Shape(
                        "tree artifact has no nodes".to_string(),
                    ));
                }
                for node in nodes {
                    match node {
                        TreeNode::Split {
                            feature,
                            left,
                            right,
                            ..
                        } => {
                            if *feature >= n_features {
                                return Err(ModelLoadError::Shape(format!(
                                    "split on feature {} but companion artifact encodes {} features",
                                    feature, n_features
                                )));
                            }
                            if *left >= nodes.len() || *right >= nodes.len() {
                                return Err(ModelLoadError::Shape(format!(
                                    "split child index out of range ({} nodes)",
                                    nodes.len()
                                )));
                            }
                        }
                        TreeNode::Leaf { class } => {
                            if *class >= classes.len() {
                                return Err(ModelLoadError::Shape(format!(
                                    "leaf class {} out of range ({} classes)",
                                    class,
                                    classes.len()
                                )));
                            }
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

/// Pre-fitted categorical encoder: input column order plus the known
/// category values per categorical column.
#[derive(Debug, Clone, Deserialize)]
pub struct FittedEncoder {
    pub columns: Vec<String>,
    pub categories: HashMap<String, Vec<String>>,
}

/// Companion encoding artifact. The two training generations are
/// incompatible: one saved the full one-hot column list, the other a fitted
/// ordinal encoder. Both shapes are accepted as independent legacy variants.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CompanionArtifact {
    /// One-hot expansion: the fixed list of encoded column names
    Columns(Vec<String>),

    /// Fitted ordinal encoder over the raw input columns
    Encoder(FittedEncoder),
}

impl CompanionArtifact {
    /// Width of the encoded feature row
    pub fn feature_len(&self) -> usize {
        match self {
            CompanionArtifact::Columns(columns) => columns.len(),
            CompanionArtifact::Encoder(encoder) => encoder.columns.len(),
        }
    }

    pub fn validate(&self) -> Result<(), ModelLoadError> {
        match self {
            CompanionArtifact::Columns(columns) => {
                if columns.is_empty() {
                    return Err(ModelLoadError::Shape(
                        "feature column list is empty".to_string(),
                    ));
                }
                Ok(())
            }
            CompanionArtifact::Encoder(encoder) => {
                if encoder.columns.is_empty() {
                    return Err(ModelLoadError::Shape(
                        "fitted encoder has no columns".to_string(),
                    ));
                }
                for column in &encoder.columns {
                    if column != NUMERIC_COLUMN && !encoder.categories.contains_key(column) {
                        return Err(ModelLoadError::Shape(format!(
                            "fitted encoder is missing categories for column {}",
                            column
                        )));
                    }
                }
                Ok(())
            }
        }
    }
}

/// Deserialize a JSON artifact from disk.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ModelLoadError> {
    if !path.exists() {
        return Err(ModelLoadError::NotFound(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path).map_err(|source| ModelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ModelLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
