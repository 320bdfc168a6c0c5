//! Application layer errors.
//!
//! These errors represent failures in orchestration (loading a submitted
//! form), not rule failures. Rule failures are `FieldError` values.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The form file does not exist.
    #[error("Form file not found: {path}")]
    FormNotFound { path: PathBuf },

    /// The form file exists but could not be read.
    #[error("Could not read form file {path}: {reason}")]
    FormUnreadable { path: PathBuf, reason: String },

    /// The form file is not valid JSON/TOML, or has the wrong shape.
    #[error("Could not parse form file {path}: {reason}")]
    FormParse { path: PathBuf, reason: String },

    /// The form file extension is neither `.json` nor `.toml`.
    #[error("Unsupported form format: {path}")]
    UnsupportedFormat { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FormNotFound { path } => vec![
                format!("No file at: {}", path.display()),
                "Check the path and try again".into(),
            ],
            Self::FormUnreadable { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check that you have read permissions".into(),
            ],
            Self::FormParse { .. } => vec![
                "Expected a document like:".into(),
                r#"  {"is_new_entry": true, "fields": {"nombre": "Ana"}}"#.into(),
            ],
            Self::UnsupportedFormat { .. } => vec![
                "Supported extensions: .json, .toml".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FormNotFound { .. } => ErrorCategory::NotFound,
            Self::FormUnreadable { .. } => ErrorCategory::Internal,
            Self::FormParse { .. } | Self::UnsupportedFormat { .. } => ErrorCategory::Validation,
        }
    }
}
