//! Form Validator - validates a whole submission.
//!
//! Every submitted value is checked with the other submitted values as its
//! form context, all against the same instant, and the failures are
//! collected into a [`FormReport`].

use tracing::{info, instrument};

use crate::{
    application::{ports::Clock, services::FieldValidator},
    domain::{FieldResult, FormContext, FormReport, FormSubmission, Locale, ValidationFlags},
};

/// Main form-level service.
pub struct FormValidator {
    fields: FieldValidator,
}

impl FormValidator {
    /// Create a form validator reading "now" from `clock`.
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            fields: FieldValidator::new(clock),
        }
    }

    pub fn with_locale(self, locale: Locale) -> Self {
        Self {
            fields: self.fields.with_locale(locale),
        }
    }

    pub fn locale(&self) -> Locale {
        self.fields.locale()
    }

    /// Validate every field of `submission`.
    ///
    /// The clock is read once, so two date fields in the same form never
    /// see different instants.
    #[instrument(skip_all, fields(fields = submission.fields.len(), new = submission.flags.is_new_entry))]
    pub fn validate_form(&self, submission: &FormSubmission) -> FormReport {
        let now = self.fields.now();
        let mut report = FormReport::new();

        for (name, value) in submission.fields.iter() {
            report.record(self.fields.validate_at(
                name,
                value,
                &submission.fields,
                &submission.flags,
                now,
            ));
        }

        info!(
            checked = report.checked(),
            failed = report.error_count(),
            "Form validated"
        );
        report
    }

    /// Validate a single field outside of a full submission.
    pub fn validate_field(
        &self,
        name: &str,
        value: &str,
        context: &FormContext,
        flags: &ValidationFlags,
    ) -> FieldResult {
        self.fields.validate(name, value, context, flags)
    }
}
