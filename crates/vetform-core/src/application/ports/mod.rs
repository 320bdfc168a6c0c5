//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `vetform-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Clock`: the current local time for date rules
//!   - `FormLoader`: reads a submitted form from storage
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

use std::path::Path;

use chrono::NaiveDateTime;

use crate::domain::FormSubmission;
use crate::error::VetformResult;

/// Port for the current time.
///
/// Implemented by:
/// - `vetform_adapters::clock::SystemClock` (production)
/// - `vetform_adapters::clock::FixedClock` (tests, reproducible runs)
///
/// Returns local wall-clock time; appointment dates are entered without an
/// offset and are compared in the clinic's local time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Port for loading a form submission.
///
/// Implemented by:
/// - `vetform_adapters::form_loader::FileFormLoader` (JSON / TOML files)
pub trait FormLoader: Send + Sync {
    /// Load the submission stored at `path`.
    fn load(&self, path: &Path) -> VetformResult<FormSubmission>;
}
