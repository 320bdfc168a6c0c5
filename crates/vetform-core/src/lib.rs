//! vetform Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for validating the
//! forms of a veterinary clinic (clients, pets, appointments, clinical
//! history, service catalogue), following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           vetform-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (FieldValidator, FormValidator)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │       (Driven: Clock, FormLoader)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     vetform-adapters (Infrastructure)   │
//! │  (SystemClock, FixedClock, FileLoader)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (Field, rules, Violation, messages)   │
//! │          No I/O, no clock               │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vetform_core::{
//!     application::FieldValidator,
//!     domain::{FormContext, ValidationFlags},
//! };
//!
//! # fn demo(clock: Box<dyn vetform_core::application::Clock>) {
//! let validator = FieldValidator::new(clock);
//! let ctx = FormContext::new().with("password", "Gatit0s!");
//! let flags = ValidationFlags::new_entry();
//!
//! if let Some(message) = validator.validate_message("confirmPassword", "Gatit0s?", &ctx, &flags) {
//!     eprintln!("{message}");
//! }
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, FieldValidator, FormValidator,
        ports::{Clock, FormLoader},
    };
    pub use crate::domain::{
        DomainError, ErrorKind, Field, FieldError, FieldResult, FormContext, FormReport,
        FormSubmission, Locale, Requirement, ValidationFlags, Violation,
    };
    pub use crate::error::{VetformError, VetformResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
