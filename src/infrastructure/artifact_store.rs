use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::category::Category;
use crate::domain::error::{AppError, Result};

/// Per-city artifact persistence. An artifact's existence is the resume
/// signal: a city with an artifact on disk is never fetched or forwarded
/// again within or across runs.
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Creates the category's output directory if needed.
    pub fn new(data_root: &Path, category: Category) -> Result<Self> {
        let dir = data_root.join(category.data_dir());
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(Self { dir })
    }

    pub fn artifact_path(&self, city: &str, category: Category) -> PathBuf {
        let normalized = city.replace(' ', "_").to_lowercase();
        self.dir
            .join(format!("{}_{}.json", normalized, category.artifact_suffix()))
    }

    pub fn exists(&self, city: &str, category: Category) -> bool {
        self.artifact_path(city, category).exists()
    }

    /// One-shot pretty-printed write of the parsed completion payload.
    pub fn write(&self, city: &str, category: Category, value: &Value) -> Result<PathBuf> {
        let path = self.artifact_path(city, category);
        let pretty = serde_json::to_string_pretty(value)
            .map_err(|e| AppError::ParseError(format!("Failed to serialize artifact: {}", e)))?;
        fs::write(&path, pretty)?;
        Ok(path)
    }
}
