//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the JSON datasets live
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the dataset files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// File name of the drafts and calendar dataset
    #[serde(default = "default_content_file")]
    pub content_file: String,

    /// File name of the strategy dataset
    #[serde(default = "default_strategy_file")]
    pub strategy_file: String,

    /// File name of the visual asset catalog
    #[serde(default = "default_visual_file")]
    pub visual_file: String,
}

impl StorageConfig {
    pub fn content_path(&self) -> PathBuf {
        self.data_dir.join(&self.content_file)
    }

    pub fn strategy_path(&self) -> PathBuf {
        self.data_dir.join(&self.strategy_file)
    }

    pub fn visual_path(&self) -> PathBuf {
        self.data_dir.join(&self.visual_file)
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        if self.content_file.trim().is_empty() {
            return Err(ValidationError::MissingRequired("storage.content_file"));
        }
        if self.strategy_file.trim().is_empty() {
            return Err(ValidationError::MissingRequired("storage.strategy_file"));
        }
        if self.visual_file.trim().is_empty() {
            return Err(ValidationError::MissingRequired("storage.visual_file"));
        }
        if self.content_file == self.strategy_file
            || self.content_file == self.visual_file
            || self.strategy_file == self.visual_file
        {
            return Err(ValidationError::SharedDataFile);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            content_file: default_content_file(),
            strategy_file: default_strategy_file(),
            visual_file: default_visual_file(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_content_file() -> String {
    "content.json".to_string()
}

fn default_strategy_file() -> String {
    "strategies.json".to_string()
}

fn default_visual_file() -> String {
    "visual.json".to_string()
}
