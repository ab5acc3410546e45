use std::env;
use std::path::PathBuf;

/// Locations of the serialized classifier and companion artifacts.
///
/// Defaults are relative to the server's working directory, mirroring where
/// the offline training script drops its output.
#[derive(Debug, Clone)]
pub struct ModelSettings {
    pub model_path: PathBuf,
    pub feature_columns_path: PathBuf,
}

/// Application settings, built once in main from the environment and passed
/// by reference into everything that needs them. No other code reads env
/// vars.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: String,
    pub database_url: String,
    pub model: ModelSettings,
}

impl Settings {
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://aidline.db?mode=rwc".to_string());

        let model_path = env::var("MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("artifacts/urgency_model.json"));

        let feature_columns_path = env::var("FEATURE_COLUMNS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("artifacts/feature_columns.json"));

        Self {
            bind_addr,
            database_url,
            model: ModelSettings {
                model_path,
                feature_columns_path,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-global; tests touching them run
    // serially.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults_when_env_is_unset() {
        let _guard = ENV_MUTEX.lock().unwrap();
        for var in ["BIND_ADDR", "DATABASE_URL", "MODEL_PATH", "FEATURE_COLUMNS_PATH"] {
            env::remove_var(var);
        }

        let settings = Settings::from_env();
        assert_eq!(settings.bind_addr, "0.0.0.0:5000");
        assert_eq!(settings.database_url, "sqlite://aidline.db?mode=rwc");
        assert_eq!(
            settings.model.model_path,
            PathBuf::from("artifacts/urgency_model.json")
        );
        assert_eq!(
            settings.model.feature_columns_path,
            PathBuf::from("artifacts/feature_columns.json")
        );
    }

    #[test]
    fn test_env_overrides_are_honoured() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BIND_ADDR", "127.0.0.1:8080");
        env::set_var("MODEL_PATH", "/opt/models/urgency.json");

        let settings = Settings::from_env();
        assert_eq!(settings.bind_addr, "127.0.0.1:8080");
        assert_eq!(settings.model.model_path, PathBuf::from("/opt/models/urgency.json"));

        env::remove_var("BIND_ADDR");
        env::remove_var("MODEL_PATH");
    }
}
