// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================
//
// These are *operational* errors (bad configuration values, unknown
// identifiers). A value that fails a field rule is NOT an error: it is a
// `FieldError` returned as data.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Lookup Errors
    // ========================================================================
    #[error("Unknown field: '{0}'")]
    UnknownField(String),

    #[error("Unknown locale: '{0}'")]
    UnknownLocale(String),

    #[error("Invalid {kind}: '{value}'")]
    InvalidEnumValue { kind: &'static str, value: String },

    // ========================================================================
    // Input Errors
    // ========================================================================
    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Invalid context entry '{entry}': expected KEY=VALUE")]
    InvalidContextEntry { entry: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownField(name) => vec![
                format!("'{}' is not a recognised form field", name),
                "Try: vetform fields".into(),
            ],
            Self::UnknownLocale(_) => vec![
                "Supported locales:".into(),
                "  • es - Spanish (default)".into(),
                "  • en - English".into(),
            ],
            Self::InvalidTimestamp { .. } => vec![
                "Use RFC 3339 (2026-03-01T09:30:00-05:00)".into(),
                "Or a local timestamp: 2026-03-01 09:30:00".into(),
            ],
            Self::InvalidContextEntry { entry } => vec![
                format!("Could not split '{}' on '='", entry),
                "Example: --context password=Secreto1!".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownField(_) => ErrorCategory::NotFound,
            Self::UnknownLocale(_)
            | Self::InvalidEnumValue { .. }
            | Self::InvalidTimestamp { .. }
            | Self::InvalidContextEntry { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
