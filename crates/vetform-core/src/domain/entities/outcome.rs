//! Validation results: what failed ([`Violation`]), how it is reported
//! ([`FieldError`]), and the form-level aggregate ([`FormReport`]).

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::value_objects::ErrorKind;

/// Character classes a field may be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// Letters (accented, ñ), spaces, hyphens and apostrophes.
    PersonName,
    /// Letters (accented, ñ) and spaces.
    Letters,
    /// ASCII letters, digits and hyphens.
    AlphanumericHyphen,
    /// ASCII letters, digits, hyphens, underscores and dots.
    Microchip,
    /// Letters, digits, spaces and `# - . , ° /`.
    Address,
}

/// One password complexity requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

/// Numeric bounds for range checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    /// When set, `min` itself is rejected.
    pub min_exclusive: bool,
}

impl Bounds {
    pub const fn inclusive(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_exclusive: false,
        }
    }

    pub const fn above(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_exclusive: true,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        let above_min = if self.min_exclusive {
            value > self.min
        } else {
            value >= self.min
        };
        above_min && value <= self.max
    }
}

/// The rule a value broke, with the parameters needed to explain it.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    // Security pre-screen
    SuspiciousContent,
    InappropriateContent,
    PredictablePattern,

    Required,

    // Length
    TooShort { min: usize },
    TooLong { max: usize },
    LengthOutOfRange { min: usize, max: usize },

    // Shape
    InvalidCharacters(Charset),
    InvalidEmail,
    GenericEmail,
    InvalidPhone,
    AddressRepeatedPunctuation,
    AddressEdgePunctuation,
    AddressFormat,
    WeakPassword(PasswordRule),
    NotInSet { allowed: &'static [&'static str] },
    NotAnInteger,
    NotANumber,
    InvalidDate,
    InvalidDateTime,
    InvalidPrice,

    // Bounds
    OutOfRange(Bounds),
    DateInFuture,
    DateBefore { min: NaiveDate },
    DateTimeInPast,
    DateBeforeToday,

    PasswordMismatch,
}

impl Violation {
    /// Machine-readable category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SuspiciousContent | Self::InappropriateContent | Self::PredictablePattern => {
                ErrorKind::Security
            }
            Self::Required => ErrorKind::Required,
            Self::TooShort { .. }
            | Self::TooLong { .. }
            | Self::LengthOutOfRange { .. }
            | Self::OutOfRange(_)
            | Self::DateInFuture
            | Self::DateBefore { .. }
            | Self::DateTimeInPast
            | Self::DateBeforeToday => ErrorKind::Range,
            Self::PasswordMismatch => ErrorKind::CrossField,
            Self::InvalidCharacters(_)
            | Self::InvalidEmail
            | Self::GenericEmail
            | Self::InvalidPhone
            | Self::AddressRepeatedPunctuation
            | Self::AddressEdgePunctuation
            | Self::AddressFormat
            | Self::WeakPassword(_)
            | Self::NotInSet { .. }
            | Self::NotAnInteger
            | Self::NotANumber
            | Self::InvalidDate
            | Self::InvalidDateTime
            | Self::InvalidPrice => ErrorKind::Format,
        }
    }
}

/// A failed field: which field, what kind of failure, and the display text.
///
/// `message` is always non-empty and already rendered in the locale the
/// validator was configured with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub kind: ErrorKind,
    #[serde(skip)]
    pub violation: Violation,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, violation: Violation, message: String) -> Self {
        Self {
            field: field.into(),
            kind: violation.kind(),
            violation,
            message,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

/// Outcome of validating one field.
pub type FieldResult = Result<(), FieldError>;

/// Form-level error map: every failing field, keyed by wire name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormReport {
    errors: BTreeMap<String, FieldError>,
    checked: usize,
}

impl FormReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one field.
    pub fn record(&mut self, result: FieldResult) {
        self.checked += 1;
        if let Err(err) = result {
            self.errors.insert(err.field.clone(), err);
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields that were validated.
    pub fn checked(&self) -> usize {
        self.checked
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// Failing fields in field-name order.
    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }

    /// `field -> message`, the shape the forms display.
    pub fn messages(&self) -> BTreeMap<&str, &str> {
        self.errors
            .iter()
            .map(|(k, v)| (k.as_str(), v.message.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_respect_exclusive_minimum() {
        let weight = Bounds::above(0.0, 200.0);
        assert!(!weight.contains(0.0));
        assert!(weight.contains(0.1));
        assert!(weight.contains(200.0));
        assert!(!weight.contains(200.1));

        let age = Bounds::inclusive(0.0, 30.0);
        assert!(age.contains(0.0));
        assert!(!age.contains(31.0));
    }

    #[test]
    fn violation_kinds() {
        assert_eq!(Violation::SuspiciousContent.kind(), ErrorKind::Security);
        assert_eq!(Violation::Required.kind(), ErrorKind::Required);
        assert_eq!(Violation::InvalidEmail.kind(), ErrorKind::Format);
        assert_eq!(Violation::TooLong { max: 10 }.kind(), ErrorKind::Range);
        assert_eq!(Violation::PasswordMismatch.kind(), ErrorKind::CrossField);
    }

    #[test]
    fn report_collects_only_failures() {
        let mut report = FormReport::new();
        report.record(Ok(()));
        report.record(Err(FieldError::new(
            "email",
            Violation::InvalidEmail,
            "bad email".into(),
        )));

        assert!(!report.is_valid());
        assert_eq!(report.checked(), 2);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.messages().get("email"), Some(&"bad email"));
    }
}
