use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;

use crate::domain::error::{AppError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "app.toml";

/// Run configuration, merged from a TOML file and `STRIDE_`-prefixed
/// environment variables (environment wins). `api_key` and `intake_url`
/// have no defaults; a run cannot start without them.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api_key: String,
    pub intake_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_cities_file")]
    pub cities_file: PathBuf,
    #[serde(default = "default_data_root")]
    pub data_root: PathBuf,
    #[serde(default = "default_max_api_calls")]
    pub max_api_calls: u32,
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

fn default_model() -> String {
    "gemini-1.5-flash-latest".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models".to_string()
}

fn default_cities_file() -> PathBuf {
    PathBuf::from("cities_500.csv")
}

fn default_data_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_max_api_calls() -> u32 {
    1000
}

fn default_http_timeout_secs() -> u64 {
    120
}

impl Settings {
    pub fn load(config_file: &Path) -> Result<Self> {
        Figment::new()
            .merge(Toml::file(config_file))
            .merge(Env::prefixed("STRIDE_"))
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("app.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_applies_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "api_key = \"k\"\nintake_url = \"https://intake.example/api\"\n",
        );
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.model, "gemini-1.5-flash-latest");
        assert_eq!(settings.max_api_calls, 1000);
        assert_eq!(settings.cities_file, PathBuf::from("cities_500.csv"));
    }

    #[test]
    fn test_missing_required_key_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "api_key = \"k\"\n");
        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
