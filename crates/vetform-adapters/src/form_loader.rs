//! Form file adapter: reads a [`FormSubmission`] from JSON or TOML.
//!
//! ```json
//! { "is_new_entry": true, "original_email": "", "fields": { "edad_mascota": 5 } }
//! ```
//!
//! Field values may be strings, numbers or booleans; non-strings are
//! stringified, since the validator works on raw text. JSON `null` becomes
//! an empty value.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;
use vetform_core::{
    application::{ApplicationError, ports::FormLoader},
    domain::{FormContext, FormSubmission, ValidationFlags},
    error::{VetformError, VetformResult},
};

/// Supported file formats, picked by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFormat {
    Json,
    Toml,
}

impl FormFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Loads submissions from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFormLoader;

impl FileFormLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse `content` as a submission in `format`. `path` is only used in
    /// error messages.
    pub fn parse(content: &str, format: FormFormat, path: &Path) -> VetformResult<FormSubmission> {
        let raw: RawSubmission = match format {
            FormFormat::Json => serde_json::from_str(content).map_err(|e| parse_error(path, e))?,
            FormFormat::Toml => toml::from_str(content).map_err(|e| parse_error(path, e))?,
        };
        Ok(raw.into())
    }
}

impl FormLoader for FileFormLoader {
    fn load(&self, path: &Path) -> VetformResult<FormSubmission> {
        let content = std::fs::read_to_string(path).map_err(|e| map_io_error(path, e))?;
        let format = FormFormat::from_path(path).ok_or_else(|| {
            VetformError::from(ApplicationError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        })?;

        let submission = Self::parse(&content, format, path)?;
        debug!(
            path = %path.display(),
            ?format,
            fields = submission.fields.len(),
            "Form loaded"
        );
        Ok(submission)
    }
}

#[derive(Debug, Deserialize)]
struct RawSubmission {
    #[serde(default)]
    is_new_entry: bool,
    #[serde(default)]
    original_email: String,
    #[serde(default)]
    fields: BTreeMap<String, Option<Scalar>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Bool(bool),
    Integer(i64),
    Float(f64),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Bool(b) => b.to_string(),
            Self::Integer(n) => n.to_string(),
            Self::Float(x) => x.to_string(),
        }
    }
}

impl From<RawSubmission> for FormSubmission {
    fn from(raw: RawSubmission) -> Self {
        let fields: FormContext = raw
            .fields
            .into_iter()
            .map(|(name, value)| (name, value.map(Scalar::into_text).unwrap_or_default()))
            .collect();
        let flags = ValidationFlags {
            is_new_entry: raw.is_new_entry,
            original_email: raw.original_email,
        };
        FormSubmission::new(fields, flags)
    }
}

fn map_io_error(path: &Path, e: io::Error) -> VetformError {
    let path = path.to_path_buf();
    match e.kind() {
        io::ErrorKind::NotFound => ApplicationError::FormNotFound { path },
        _ => ApplicationError::FormUnreadable {
            path,
            reason: e.to_string(),
        },
    }
    .into()
}

fn parse_error(path: &Path, e: impl std::fmt::Display) -> VetformError {
    ApplicationError::FormParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
