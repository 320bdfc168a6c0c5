pub mod context;
pub mod outcome;

pub use context::{FormContext, FormSubmission, ValidationFlags};
pub use outcome::{Bounds, Charset, FieldError, FieldResult, FormReport, PasswordRule, Violation};
