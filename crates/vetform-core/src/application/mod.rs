//! Application layer for vetform.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (FieldValidator, FormValidator)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! validation rules itself. All rules live in `crate::domain::rules`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{FieldValidator, FormValidator};

// Re-export port traits (for adapter implementation)
pub use ports::{Clock, FormLoader};

pub use error::ApplicationError;
