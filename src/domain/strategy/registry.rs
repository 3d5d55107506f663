//! Registered marketing strategy documents.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::foundation::{StrategyId, Timestamp, ValidationError};

/// File extensions accepted for strategy documents.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx", "doc", "txt"];

/// Largest accepted strategy document, in bytes (10 MiB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Lifecycle of a registered strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyStatus {
    #[default]
    Uploaded,
    Analyzed,
}

/// Metadata describing a strategy document to register.
#[derive(Debug, Clone, Default)]
pub struct NewStrategy {
    pub original_name: String,
    pub file_size: u64,
    pub mime_type: Option<String>,
    pub file_path: Option<String>,
}

/// A strategy document known to the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub id: StrategyId,
    pub name: String,
    pub original_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    pub file_size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    pub upload_date: Timestamp,
    #[serde(default)]
    pub status: StrategyStatus,
}

impl Strategy {
    /// Validates the document metadata and creates a strategy in `uploaded` state.
    ///
    /// # Errors
    ///
    /// - `EmptyField` when the original name is blank
    /// - `InvalidFormat` when the extension is not pdf, docx, doc or txt
    /// - `OutOfRange` when the file is larger than 10 MiB
    pub fn register(input: NewStrategy) -> Result<Self, ValidationError> {
        let original_name = input.original_name.trim().to_string();
        if original_name.is_empty() {
            return Err(ValidationError::empty_field("originalName"));
        }

        let path = Path::new(&original_name);
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ValidationError::invalid_format(
                "originalName",
                "Only PDF, DOCX, DOC, and TXT files are allowed",
            ));
        }

        if input.file_size > MAX_FILE_SIZE {
            return Err(ValidationError::out_of_range(
                "fileSize",
                0,
                MAX_FILE_SIZE as i32,
                i32::try_from(input.file_size).unwrap_or(i32::MAX),
            ));
        }

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&original_name)
            .to_string();

        Ok(Self {
            id: StrategyId::new(),
            name,
            original_name,
            file_path: input.file_path,
            file_size: input.file_size,
            mime_type: input.mime_type,
            upload_date: Timestamp::now(),
            status: StrategyStatus::Uploaded,
        })
    }

    pub fn mark_analyzed(&mut self) {
        self.status = StrategyStatus::Analyzed;
    }
}
