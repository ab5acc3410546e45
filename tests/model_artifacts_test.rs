// Artifact loading from disk and the end-to-end prediction pipeline

use std::fs;

use aidline_backend::config::ModelSettings;
use aidline_backend::model::{ModelState, RequestRecord};
use aidline_backend::types::dto::predict::PredictRequest;
use tempfile::TempDir;

fn write_artifacts(dir: &TempDir, model: &str, columns: &str) -> ModelSettings {
    let model_path = dir.path().join("urgency_model.json");
    let columns_path = dir.path().join("feature_columns.json");
    fs::write(&model_path, model).expect("Failed to write model artifact");
    fs::write(&columns_path, columns).expect("Failed to write columns artifact");

    ModelSettings {
        model_path,
        feature_columns_path: columns_path,
    }
}

const LINEAR_MODEL: &str = r#"{
    "kind": "linear",
    "classes": [0, 1, 2],
    "coefficients": [
        [-0.02, 0.0, 0.0, 0.0, 0.0, 0.0],
        [0.005, 0.3, 0.3, 0.3, 0.3, 0.3],
        [0.02, 0.8, 0.8, 0.8, 0.8, 0.8]
    ],
    "intercepts": [1.0, 0.2, -2.0]
}"#;

const FEATURE_COLUMNS: &str = r#"[
    "PeopleAffected",
    "State_TX",
    "Domain_Health",
    "ResourcesRequired_Medical",
    "UrgencyReason_Outbreak",
    "Timeline_Immediate"
]"#;

#[test]
fn test_load_and_predict_the_worked_example() {
    let dir = TempDir::new().unwrap();
    let settings = write_artifacts(&dir, LINEAR_MODEL, FEATURE_COLUMNS);

    let state = ModelState::load(&settings);
    assert!(state.ready());

    // The worked example from the API contract: TX outbreak affecting 150
    let request = PredictRequest {
        state: Some("TX".to_string()),
        people_affected: Some(serde_json::json!("150")),
        domain: Some("Health".to_string()),
        resource_type: Some("Medical".to_string()),
        urgency_reason: Some("Outbreak".to_string()),
        timeline: Some("Immediate".to_string()),
    };
    let record = RequestRecord::from_request(&request);
    let prediction = state.predict(&record).unwrap();

    assert!(["LOW", "MEDIUM", "HIGH"].contains(&prediction.urgency.as_str()));
    assert!((0.0..=1.0).contains(&prediction.confidence));
}

#[test]
fn test_missing_model_file_leaves_state_unavailable() {
    let dir = TempDir::new().unwrap();
    let columns_path = dir.path().join("feature_columns.json");
    fs::write(&columns_path, FEATURE_COLUMNS).unwrap();

    let settings = ModelSettings {
        model_path: dir.path().join("does_not_exist.json"),
        feature_columns_path: columns_path,
    };

    let state = ModelState::load(&settings);
    assert!(!state.ready());
}

#[test]
fn test_unparsable_artifact_leaves_state_unavailable() {
    let dir = TempDir::new().unwrap();
    let settings = write_artifacts(&dir, "not json at all", FEATURE_COLUMNS);

    let state = ModelState::load(&settings);
    assert!(!state.ready());
}

#[test]
fn test_shape_mismatch_between_artifacts_leaves_state_unavailable() {
    let dir = TempDir::new().unwrap();
    // Classifier expects 6 features, companion only encodes 2
    let settings = write_artifacts(
        &dir,
        LINEAR_MODEL,
        r#"["PeopleAffected", "State_TX"]"#,
    );

    let state = ModelState::load(&settings);
    assert!(!state.ready());
}

#[test]
fn test_fitted_encoder_variant_loads_from_disk() {
    let dir = TempDir::new().unwrap();
    let model = r#"{
        "kind": "tree",
        "classes": ["low", "high"],
        "nodes": [
            {"feature": 1, "threshold": 100.0, "left": 1, "right": 2},
            {"class": 0},
            {"class": 1}
        ]
    }"#;
    let encoder = r#"{
        "columns": ["State", "PeopleAffected", "Domain", "ResourcesRequired", "UrgencyReason", "Timeline"],
        "categories": {
            "State": ["CA", "TX"],
            "Domain": ["Food", "Health"],
            "ResourcesRequired": ["Medical", "Shelter"],
            "UrgencyReason": ["Flood", "Outbreak"],
            "Timeline": ["Immediate", "Weeks"]
        }
    }"#;
    let settings = write_artifacts(&dir, model, encoder);

    let state = ModelState::load(&settings);
    assert!(state.ready());

    let request = PredictRequest {
        people_affected: Some(serde_json::json!(500)),
        ..Default::default()
    };
    let prediction = state
        .predict(&RequestRecord::from_request(&request))
        .unwrap();

    // String-label artifact: upper-cased passthrough, default confidence
    assert_eq!(prediction.urgency, "HIGH");
    assert_eq!(prediction.confidence, 0.8);
}

#[test]
fn test_unknown_categories_still_classify() {
    let dir = TempDir::new().unwrap();
    let settings = write_artifacts(&dir, LINEAR_MODEL, FEATURE_COLUMNS);
    let state = ModelState::load(&settings);

    // Every categorical value is outside the cached column list; the row
    // reindexes to all-zero indicators and classification still answers.
    let request = PredictRequest {
        state: Some("ZZ".to_string()),
        domain: Some("Logistics".to_string()),
        ..Default::default()
    };
    let prediction = state
        .predict(&RequestRecord::from_request(&request))
        .unwrap();
    assert!(["LOW", "MEDIUM", "HIGH"].contains(&prediction.urgency.as_str()));
}
