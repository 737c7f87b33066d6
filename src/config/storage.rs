//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the catalog table and history ledger live on disk
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding both files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Alternative table (YAML), relative to `data_dir`
    #[serde(default = "default_catalog_file")]
    pub catalog_file: String,

    /// Calculation history (JSON), relative to `data_dir`
    #[serde(default = "default_history_file")]
    pub history_file: String,
}

impl StorageConfig {
    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(&self.catalog_file)
    }

    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(&self.history_file)
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.catalog_file.trim().is_empty() {
            return Err(ValidationError::MissingRequired("storage.catalog_file"));
        }
        if self.history_file.trim().is_empty() {
            return Err(ValidationError::MissingRequired("storage.history_file"));
        }
        if self.catalog_path() == self.history_path() {
            return Err(ValidationError::StorageFilesCollide);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            catalog_file: default_catalog_file(),
            history_file: default_history_file(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_catalog_file() -> String {
    "alternatives.yaml".to_string()
}

fn default_history_file() -> String {
    "calculation_history.json".to_string()
}
