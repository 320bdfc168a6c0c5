//! Infrastructure adapters for vetform.
//!
//! This crate implements the ports defined in `vetform-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod clock;
pub mod form_loader;

// Re-export commonly used adapters
pub use clock::{FixedClock, SystemClock};
pub use form_loader::{FileFormLoader, FormFormat};
