use crate::errors::PredictionError;
use crate::model::artifact::{ClassifierArtifact, TreeNode};

/// Raw classifier output: the winning class index plus per-class
/// probabilities when the model exposes them.
#[derive(Debug, Clone)]
pub struct RawPrediction {
    pub class_index: usize,
    pub probabilities: Option<Vec<f64>>,
}

impl ClassifierArtifact {
    /// Classify a single encoded feature row.
    pub fn predict(&self, features: &[f64]) -> Result<RawPrediction, PredictionError> {
        match self {
            ClassifierArtifact::Linear {
                coefficients,
                intercepts,
                ..
            } => predict_linear(coefficients, intercepts, features),
            ClassifierArtifact::Tree { nodes, .. } => predict_tree(nodes, features),
        }
    }
}

fn predict_linear(
    coefficients: &[Vec<f64>],
    intercepts: &[f64],
    features: &[f64],
) -> Result<RawPrediction, PredictionError> {
    let expected = coefficients
        .first()
        .map(Vec::len)
        .ok_or_else(|| PredictionError::Malformed("linear model has no classes".to_string()))?;
    if features.len() != expected {
        return Err(PredictionError::FeatureShape {
            expected,
            got: features.len(),
        });
    }

    let scores: Vec<f64> = coefficients
        .iter()
        .zip(intercepts)
        .map(|(row, intercept)| {
            intercept + row.iter().zip(features).map(|(w, x)| w * x).sum::<f64>()
        })
        .collect();

    let class_index = argmax(&scores)
        .ok_or_else(|| PredictionError::Malformed("linear model produced no scores".to_string()))?;

    Ok(RawPrediction {
        class_index,
        probabilities: Some(softmax(&scores)),
    })
}

fn predict_tree(nodes: &[TreeNode], features: &[f64]) -> Result<RawPrediction, PredictionError> {
    let mut index = 0usize;
    // A well-formed tree reaches a leaf within nodes.len() steps; the cap
    // turns a malformed cyclic artifact into an error instead of a hang.
    for _ in 0..=nodes.len() {
        match nodes.get(index) {
            Some(TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            }) => {
                let value = features.get(*feature).copied().ok_or({
                    PredictionError::FeatureShape {
                        expected: feature + 1,
                        got: features.len(),
                    }
                })?;
                index = if value <= *threshold { *left } else { *right };
            }
            Some(TreeNode::Leaf { class }) => {
                return Ok(RawPrediction {
                    class_index: *class,
                    probabilities: None,
                });
            }
            None => {
                return Err(PredictionError::Malformed(format!(
                    "tree node index {} out of range",
                    index
                )));
            }
        }
    }
    Err(PredictionError::Malformed(
        "tree traversal did not reach a leaf".to_string(),
    ))
}

fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Numerically stable softmax over the decision scores.
fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.iter().map(|e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::artifact::ClassLabel;

    fn linear_model() -> ClassifierArtifact {
        // Two features, three classes; class scores rise with feature 0,
        // fall with feature 1
        ClassifierArtifact::Linear {
            classes: vec![ClassLabel::Id(0), ClassLabel::Id(1), ClassLabel::Id(2)],
            coefficients: vec![
                vec![-1.0, 0.5],
                vec![0.1, 0.1],
                vec![1.0, -0.5],
            ],
            intercepts: vec![0.2, 0.0, -0.2],
        }
    }

    #[test]
    fn test_linear_predicts_argmax_class() {
        let model = linear_model();
        let prediction = model.predict(&[5.0, 0.0]).unwrap();
        assert_eq!(prediction.class_index, 2);

        let prediction = model.predict(&[-5.0, 0.0]).unwrap();
        assert_eq!(prediction.class_index, 0);
    }

    #[test]
    fn test_linear_probabilities_sum_to_one() {
        let model = linear_model();
        let prediction = model.predict(&[1.0, 2.0]).unwrap();
        let probs = prediction.probabilities.unwrap();
        assert_eq!(probs.len(), 3);
        let sum: f64 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(probs.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn test_linear_rejects_wrong_feature_width() {
        let model = linear_model();
        let result = model.predict(&[1.0, 2.0, 3.0]);
        assert!(matches!(
            result,
            Err(PredictionError::FeatureShape { expected: 2, got: 3 })
        ));
    }

    #[test]
    fn test_tree_routes_to_the_correct_leaf() {
        let model = ClassifierArtifact::Tree {
            classes: vec![ClassLabel::Id(0), ClassLabel::Id(2)],
            nodes: vec![
                TreeNode::Split {
                    feature: 0,
                    threshold: 100.0,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf { class: 0 },
                TreeNode::Leaf { class: 1 },
            ],
        };

        let low = model.predict(&[50.0]).unwrap();
        assert_eq!(low.class_index, 0);
        assert!(low.probabilities.is_none());

        let high = model.predict(&[150.0]).unwrap();
        assert_eq!(high.class_index, 1);
    }

    #[test]
    fn test_cyclic_tree_errors_instead_of_hanging() {
        let model = ClassifierArtifact::Tree {
            classes: vec![ClassLabel::Id(0)],
            nodes: vec![TreeNode::Split {
                feature: 0,
                threshold: 1.0,
                left: 0,
                right: 0,
            }],
        };
        assert!(matches!(
            model.predict(&[0.0]),
            Err(PredictionError::Malformed(_))
        ));
    }

    #[test]
    fn test_argmax_prefers_first_of_equal_scores() {
        assert_eq!(argmax(&[1.0, 1.0, 0.5]), Some(0));
        assert_eq!(argmax(&[]), None);
    }
}
