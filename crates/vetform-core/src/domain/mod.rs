// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for vetform.
//!
//! Pure validation logic for the clinic's forms. No I/O and no clock:
//! callers hand in the current time, the form context and the locale.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or system clock
//! - **Deterministic**: Same inputs, same result
//! - **Immutable inputs**: Rules borrow; nothing is mutated
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod messages;
pub mod rules;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    Bounds, Charset, FieldError, FieldResult, FormContext, FormReport, FormSubmission,
    PasswordRule, ValidationFlags, Violation,
};

pub use error::{DomainError, ErrorCategory};

pub use rules::{RuleContext, validate, validate_message};

pub use value_objects::{AppointmentStatus, DocumentType, ErrorKind, Field, Locale, Requirement};
