//! Field Validator - the single-field use case.
//!
//! Binds the pure rules in `domain::rules` to an injected [`Clock`] and a
//! message locale. Values are never logged; they may be passwords.

use chrono::NaiveDateTime;
use tracing::{debug, instrument};

use crate::{
    application::ports::Clock,
    domain::{FieldResult, FormContext, Locale, RuleContext, ValidationFlags, rules},
};

/// Validates one field at a time against the current time of its clock.
pub struct FieldValidator {
    clock: Box<dyn Clock>,
    locale: Locale,
}

impl FieldValidator {
    /// Create a validator rendering messages in the default locale.
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            locale: Locale::default(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Current time according to the injected clock.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Validate `value` submitted under `field`.
    #[instrument(skip_all, fields(field = %field))]
    pub fn validate(
        &self,
        field: &str,
        value: &str,
        context: &FormContext,
        flags: &ValidationFlags,
    ) -> FieldResult {
        self.validate_at(field, value, context, flags, self.clock.now())
    }

    /// String-or-nothing form: `None` when valid, else the display message.
    pub fn validate_message(
        &self,
        field: &str,
        value: &str,
        context: &FormContext,
        flags: &ValidationFlags,
    ) -> Option<String> {
        self.validate(field, value, context, flags)
            .err()
            .map(|e| e.message)
    }

    /// Validate against an explicit `now`, so a whole form shares one instant.
    pub(crate) fn validate_at(
        &self,
        field: &str,
        value: &str,
        context: &FormContext,
        flags: &ValidationFlags,
        now: NaiveDateTime,
    ) -> FieldResult {
        let ctx = RuleContext {
            form: context,
            flags,
            now,
        };
        let result = rules::validate(field, value, ctx, self.locale);

        match &result {
            Ok(()) => debug!(field, "valid"),
            Err(err) => debug!(field, kind = %err.kind, "invalid"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockClock;
    use crate::domain::{ErrorKind, Violation};
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn validator_at(now: NaiveDateTime) -> FieldValidator {
        let mut clock = MockClock::new();
        clock.expect_now().return_const(now);
        FieldValidator::new(Box::new(clock))
    }

    #[test]
    fn appointment_dates_follow_the_clock() {
        let validator = validator_at(at(2026, 3, 15, 10));
        let ctx = FormContext::new();
        let flags = ValidationFlags::new_entry();

        let past = validator.validate("fecha_cita", "2026-03-14T10:00", &ctx, &flags);
        assert_eq!(past.unwrap_err().violation, Violation::DateTimeInPast);

        let later = validator.validate("fecha_cita", "2026-03-15T11:00", &ctx, &flags);
        assert_eq!(later, Ok(()));
    }

    #[test]
    fn clock_is_read_once_per_call() {
        let mut clock = MockClock::new();
        clock.expect_now().times(2).return_const(at(2026, 1, 1, 8));
        let validator = FieldValidator::new(Box::new(clock));

        let ctx = FormContext::new();
        let flags = ValidationFlags::default();
        let _ = validator.validate("proxima_cita_historial", "2026-01-01", &ctx, &flags);
        let _ = validator.validate("nombre", "Ana", &ctx, &flags);
    }

    #[test]
    fn locale_switches_messages() {
        let validator = validator_at(at(2026, 3, 15, 10)).with_locale(Locale::En);
        assert_eq!(validator.locale(), Locale::En);

        let msg = validator.validate_message(
            "nombre",
            "",
            &FormContext::new(),
            &ValidationFlags::default(),
        );
        assert_eq!(msg.as_deref(), Some("The first name field is required."));
    }

    #[test]
    fn spanish_is_the_default() {
        let validator = validator_at(at(2026, 3, 15, 10));
        let err = validator
            .validate("precio_servicio", "gratis", &FormContext::new(), &ValidationFlags::default())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Format);
        assert!(err.message.starts_with("El precio"));
    }
}
