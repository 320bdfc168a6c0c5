//! Field rules and the dispatcher that runs them.
//!
//! [`validate`] is the whole contract: trim, security pre-screen, then the
//! rule set of the field. It is pure: "now" comes in as an argument, nothing
//! is read from the environment, nothing is mutated.

pub mod appointments;
pub mod catalog;
pub mod checks;
pub mod patterns;
pub mod people;
pub mod pets;
pub mod security;

use chrono::NaiveDateTime;

use crate::domain::entities::{FieldError, FieldResult, FormContext, ValidationFlags, Violation};
use crate::domain::messages;
use crate::domain::value_objects::{Field, Locale};

/// Everything a field rule may look at besides the value itself.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub form: &'a FormContext,
    pub flags: &'a ValidationFlags,
    pub now: NaiveDateTime,
}

/// Validate one submitted field.
///
/// Unknown field names still go through the security pre-screen, then pass.
pub fn validate(name: &str, raw: &str, ctx: RuleContext<'_>, locale: Locale) -> FieldResult {
    let value = raw.trim();
    let field = Field::from_name(name);

    let outcome = security::screen(name, value).and_then(|()| match field {
        Some(field) => check(field, value, ctx),
        None => Ok(()),
    });

    outcome.map_err(|violation| {
        let subject = field.map_or(name, |f| messages::label(f, locale));
        let message = messages::render(subject, &violation, locale);
        FieldError::new(name, violation, message)
    })
}

/// Same as [`validate`], reduced to the message (`None` when valid).
pub fn validate_message(
    name: &str,
    raw: &str,
    ctx: RuleContext<'_>,
    locale: Locale,
) -> Option<String> {
    validate(name, raw, ctx, locale).err().map(|e| e.message)
}

/// Field-specific rules. `value` is already trimmed and screened.
fn check(field: Field, value: &str, ctx: RuleContext<'_>) -> Result<(), Violation> {
    let today = ctx.now.date();

    match field {
        Field::FirstName | Field::LastName => people::person_name(value),
        Field::Email => people::email(value, ctx.flags),
        Field::Phone => people::phone(value),
        Field::Address => people::address(value),
        Field::Password => people::password(value, ctx.flags),
        Field::ConfirmPassword => people::confirm_password(value, ctx.form, ctx.flags),
        Field::DocumentType => people::document_type(value),
        Field::DocumentNumber => people::document_number(value),
        Field::BirthDate => people::birth_date(value, today),
        Field::Experience => people::profile_text(value, 100),
        Field::University | Field::Schedule => people::profile_text(value, 255),

        Field::PetName | Field::PetSpecies => pets::required_name(value),
        Field::PetBreed | Field::PetColor => pets::optional_descriptor(value),
        Field::PetAge => pets::age(value),
        Field::PetWeight => pets::weight(value),
        Field::PetMicrochip => pets::microchip(value),
        Field::PetOwnerId
        | Field::AppointmentServiceId
        | Field::AppointmentClientId
        | Field::AppointmentPetId => pets::required_id(value),
        Field::AppointmentVetId => pets::optional_id(value),

        Field::AppointmentDate => appointments::appointment_date(value, ctx.now),
        Field::AppointmentStatus => appointments::status(value),
        Field::AppointmentNotes
        | Field::HistoryDiagnosis
        | Field::HistoryTreatment
        | Field::HistoryObservations => appointments::notes(value),
        Field::HistoryWeight => appointments::body_weight(value),
        Field::HistoryTemperature => appointments::temperature(value),
        Field::HistoryNextAppointment => appointments::next_visit(value, today),

        Field::ServiceName => catalog::service_name(value),
        Field::ServiceDescription => catalog::service_description(value),
        Field::ServicePrice => catalog::price(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ErrorKind;
    use chrono::{Duration, NaiveDate};

    fn frozen_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn run(name: &str, value: &str, form: &FormContext, flags: &ValidationFlags) -> FieldResult {
        let ctx = RuleContext {
            form,
            flags,
            now: frozen_now(),
        };
        validate(name, value, ctx, Locale::Es)
    }

    fn simple(name: &str, value: &str) -> FieldResult {
        run(name, value, &FormContext::new(), &ValidationFlags::default())
    }

    fn new_entry(name: &str, value: &str) -> FieldResult {
        run(name, value, &FormContext::new(), &ValidationFlags::new_entry())
    }

    #[test]
    fn unknown_fields_always_pass() {
        assert_eq!(simple("apodo", ""), Ok(()));
        assert_eq!(simple("apodo", "cualquier cosa"), Ok(()));
        assert_eq!(simple("Email", "no-es-correo"), Ok(()));
    }

    #[test]
    fn drop_table_rejected_for_every_field() {
        let names = Field::ALL
            .iter()
            .map(|f| f.as_str())
            .chain(["apodo", "campo_libre"]);
        for name in names {
            for value in ["DROP TABLE mascotas", "x drop table y", "Drop Table"] {
                let err = simple(name, value).unwrap_err();
                assert_eq!(err.kind, ErrorKind::Security, "{name}: {value}");
            }
        }
    }

    #[test]
    fn script_tag_rejected_for_every_field() {
        for field in Field::ALL {
            let err = simple(field.as_str(), "<script>robar()</script>").unwrap_err();
            assert_eq!(err.violation, Violation::SuspiciousContent);
        }
        assert!(simple("apodo", "<script>").is_err());
    }

    #[test]
    fn value_is_trimmed_before_checks() {
        assert_eq!(simple("nombre", "   Ana   "), Ok(()));
        assert_eq!(simple("nombre", "   ").unwrap_err().kind, ErrorKind::Required);
    }

    #[test]
    fn email_examples() {
        assert!(simple("email", "not-an-email").is_err());
        assert_eq!(
            new_entry("email", "user@example.com").unwrap_err().violation,
            Violation::GenericEmail
        );
        assert_eq!(new_entry("email", "user@mycompany.co"), Ok(()));
    }

    #[test]
    fn password_examples() {
        assert_eq!(new_entry("password", "Abcdef1!"), Ok(()));
        assert!(new_entry("password", "abcdefgh").is_err());
    }

    #[test]
    fn password_sequence_is_security_kind() {
        let err = new_entry("password", "Clave123!").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Security);
    }

    #[test]
    fn confirm_password_examples() {
        let flags = ValidationFlags::new_entry();
        let form = FormContext::new().with("password", "Y");

        let err = run("confirmPassword", "X", &form, &flags).unwrap_err();
        assert_eq!(err.kind, ErrorKind::CrossField);
        assert_eq!(err.message, "Las contraseñas no coinciden.");

        assert_eq!(run("confirmPassword", "Y", &form, &flags), Ok(()));
    }

    #[test]
    fn pet_age_examples() {
        assert_eq!(simple("edad_mascota", "31").unwrap_err().kind, ErrorKind::Range);
        assert_eq!(simple("edad_mascota", "5"), Ok(()));
    }

    #[test]
    fn appointment_yesterday_is_rejected() {
        let yesterday = (frozen_now() - Duration::days(1))
            .format("%Y-%m-%dT%H:%M")
            .to_string();
        let err = simple("fecha_cita", &yesterday).unwrap_err();
        assert_eq!(err.violation, Violation::DateTimeInPast);
        assert_eq!(err.message, "El campo fecha de la cita no puede estar en el pasado.");

        let tomorrow = (frozen_now() + Duration::days(1))
            .format("%Y-%m-%dT%H:%M")
            .to_string();
        assert_eq!(simple("fecha_cita", &tomorrow), Ok(()));
    }

    #[test]
    fn identical_calls_give_identical_results() {
        let form = FormContext::new().with("password", "Abcdef1!");
        let flags = ValidationFlags::new_entry();
        for field in Field::ALL {
            for value in ["", "Abcdef1!", "31", "2026-03-14T10:00", "user@example.com"] {
                let first = run(field.as_str(), value, &form, &flags);
                let second = run(field.as_str(), value, &form, &flags);
                assert_eq!(first, second, "{field}: {value}");
            }
        }
    }

    #[test]
    fn messages_are_never_empty() {
        for field in Field::ALL {
            if let Err(err) = simple(field.as_str(), "?") {
                assert!(!err.message.trim().is_empty(), "{field}");
                assert_eq!(err.field, field.as_str());
            }
        }
    }

    #[test]
    fn unknown_field_security_message_uses_raw_name() {
        let err = simple("apodo", "1; DROP TABLE x").unwrap_err();
        assert!(err.message.contains("apodo"));
    }

    #[test]
    fn english_locale_renders_english() {
        let ctx = RuleContext {
            form: &FormContext::new(),
            flags: &ValidationFlags::default(),
            now: frozen_now(),
        };
        let msg = validate_message("apellido", "", ctx, Locale::En);
        assert_eq!(msg.as_deref(), Some("The last name field is required."));
    }

    #[test]
    fn validate_message_is_none_when_valid() {
        let ctx = RuleContext {
            form: &FormContext::new(),
            flags: &ValidationFlags::default(),
            now: frozen_now(),
        };
        assert_eq!(validate_message("telefono", "3005551234", ctx, Locale::Es), None);
    }
}
