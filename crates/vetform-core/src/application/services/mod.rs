//! Application services - orchestrate use cases.
//!
//! Services bind the pure rules to an injected clock and locale, and
//! aggregate per-field results for whole forms.

pub mod field_validator;
pub mod form_validator;

pub use field_validator::FieldValidator;
pub use form_validator::FormValidator;
