//! Inputs that travel alongside a field value: sibling values and flags.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Current values of the other fields in the same form.
///
/// Only cross-field rules read it (password confirmation). Keys are wire
/// field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormContext {
    values: BTreeMap<String, String>,
}

impl FormContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(field, value)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse a `KEY=VALUE` entry, as given on the command line.
    ///
    /// Only the first `=` splits, so values may contain `=`.
    pub fn parse_entry(entry: &str) -> Result<(String, String), DomainError> {
        match entry.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.to_string()))
            }
            _ => Err(DomainError::InvalidContextEntry {
                entry: entry.to_string(),
            }),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for FormContext
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Flags describing which flow the form is in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFlags {
    /// `true` when creating a record; `false` when editing an existing one.
    #[serde(default)]
    pub is_new_entry: bool,
    /// The email stored before the edit, used to skip the genericness check
    /// for unchanged addresses.
    #[serde(default)]
    pub original_email: String,
}

impl ValidationFlags {
    /// Flags for a creation form.
    pub fn new_entry() -> Self {
        Self {
            is_new_entry: true,
            original_email: String::new(),
        }
    }

    /// Flags for an edit form whose record had `original_email`.
    pub fn editing(original_email: impl Into<String>) -> Self {
        Self {
            is_new_entry: false,
            original_email: original_email.into(),
        }
    }
}

/// A whole form as submitted: every field value plus the flow flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    #[serde(flatten)]
    pub flags: ValidationFlags,
    #[serde(default)]
    pub fields: FormContext,
}

impl FormSubmission {
    pub fn new(fields: FormContext, flags: ValidationFlags) -> Self {
        Self { fields, flags }
    }
}
