//! Message catalog: turns a [`Violation`] into the sentence shown next to
//! the form field.
//!
//! Spanish is the reference locale; the clinic's forms were written for it.
//! Each arm names the field through [`label`] so the same violation reads
//! naturally for every field.

use crate::domain::entities::{Bounds, Charset, PasswordRule, Violation};
use crate::domain::value_objects::{Field, Locale};

/// Human label of a field.
pub fn label(field: Field, locale: Locale) -> &'static str {
    match locale {
        Locale::Es => label_es(field),
        Locale::En => label_en(field),
    }
}

fn label_es(field: Field) -> &'static str {
    match field {
        Field::FirstName => "nombre",
        Field::LastName => "apellido",
        Field::Email => "correo electrónico",
        Field::Phone => "teléfono",
        Field::Address => "dirección",
        Field::Password => "contraseña",
        Field::ConfirmPassword => "confirmación de contraseña",
        Field::DocumentType => "tipo de documento",
        Field::DocumentNumber => "número de documento",
        Field::BirthDate => "fecha de nacimiento",
        Field::Experience => "experiencia",
        Field::University => "universidad",
        Field::Schedule => "horario",
        Field::PetName => "nombre de la mascota",
        Field::PetSpecies => "especie",
        Field::PetBreed => "raza",
        Field::PetColor => "color",
        Field::PetAge => "edad",
        Field::PetWeight => "peso",
        Field::PetMicrochip => "microchip",
        Field::PetOwnerId => "propietario",
        Field::AppointmentServiceId => "servicio",
        Field::AppointmentClientId => "cliente",
        Field::AppointmentPetId => "mascota",
        Field::AppointmentVetId => "veterinario",
        Field::AppointmentDate => "fecha de la cita",
        Field::AppointmentStatus => "estado de la cita",
        Field::AppointmentNotes => "notas adicionales",
        Field::HistoryDiagnosis => "diagnóstico",
        Field::HistoryTreatment => "tratamiento",
        Field::HistoryObservations => "observaciones",
        Field::HistoryWeight => "peso actual",
        Field::HistoryTemperature => "temperatura",
        Field::HistoryNextAppointment => "próxima cita",
        Field::ServiceName => "nombre del servicio",
        Field::ServiceDescription => "descripción del servicio",
        Field::ServicePrice => "precio",
    }
}

fn label_en(field: Field) -> &'static str {
    match field {
        Field::FirstName => "first name",
        Field::LastName => "last name",
        Field::Email => "email",
        Field::Phone => "phone",
        Field::Address => "address",
        Field::Password => "password",
        Field::ConfirmPassword => "password confirmation",
        Field::DocumentType => "document type",
        Field::DocumentNumber => "document number",
        Field::BirthDate => "birth date",
        Field::Experience => "experience",
        Field::University => "university",
        Field::Schedule => "schedule",
        Field::PetName => "pet name",
        Field::PetSpecies => "species",
        Field::PetBreed => "breed",
        Field::PetColor => "color",
        Field::PetAge => "age",
        Field::PetWeight => "weight",
        Field::PetMicrochip => "microchip",
        Field::PetOwnerId => "owner",
        Field::AppointmentServiceId => "service",
        Field::AppointmentClientId => "client",
        Field::AppointmentPetId => "pet",
        Field::AppointmentVetId => "veterinarian",
        Field::AppointmentDate => "appointment date",
        Field::AppointmentStatus => "appointment status",
        Field::AppointmentNotes => "additional notes",
        Field::HistoryDiagnosis => "diagnosis",
        Field::HistoryTreatment => "treatment",
        Field::HistoryObservations => "observations",
        Field::HistoryWeight => "current weight",
        Field::HistoryTemperature => "temperature",
        Field::HistoryNextAppointment => "next appointment",
        Field::ServiceName => "service name",
        Field::ServiceDescription => "service description",
        Field::ServicePrice => "price",
    }
}

/// Render `violation` for the field called `subject`.
///
/// `subject` is the human label for known fields, or the raw wire name for
/// fields the validator does not recognise (only the security screen can
/// fail those).
pub fn render(subject: &str, violation: &Violation, locale: Locale) -> String {
    match locale {
        Locale::Es => render_es(subject, violation),
        Locale::En => render_en(subject, violation),
    }
}

fn render_es(s: &str, violation: &Violation) -> String {
    match violation {
        Violation::SuspiciousContent => {
            format!("El campo {s} contiene contenido sospechoso y no puede ser procesado.")
        }
        Violation::InappropriateContent => {
            format!("El campo {s} contiene lenguaje inapropiado.")
        }
        Violation::PredictablePattern => format!(
            "El campo {s} no debe contener caracteres repetidos ni secuencias predecibles \
             (por ejemplo 'aaaa', 'abc' o '123')."
        ),
        Violation::Required => format!("El campo {s} es obligatorio."),
        Violation::TooShort { min } => {
            format!("El campo {s} debe tener al menos {min} caracteres.")
        }
        Violation::TooLong { max } => {
            format!("El campo {s} no puede superar los {max} caracteres.")
        }
        Violation::LengthOutOfRange { min, max } => {
            format!("El campo {s} debe tener entre {min} y {max} caracteres.")
        }
        Violation::InvalidCharacters(charset) => {
            format!("El campo {s} solo puede contener {}.", charset_es(*charset))
        }
        Violation::InvalidEmail => {
            "Ingrese un correo electrónico válido (por ejemplo: usuario@dominio.com).".into()
        }
        Violation::GenericEmail => {
            "El correo electrónico parece genérico o de prueba. Use un correo real.".into()
        }
        Violation::InvalidPhone => "Ingrese un número de teléfono válido: solo dígitos, \
                                    espacios, guiones, paréntesis y un '+' inicial."
            .into(),
        Violation::AddressRepeatedPunctuation => {
            "La dirección no puede tener signos de puntuación consecutivos.".into()
        }
        Violation::AddressEdgePunctuation => {
            "La dirección no puede comenzar ni terminar con un signo de puntuación.".into()
        }
        Violation::AddressFormat => {
            "La dirección debe tener un formato válido, por ejemplo: Calle 45 #12-34.".into()
        }
        Violation::WeakPassword(rule) => format!(
            "La contraseña debe incluir al menos {}.",
            match rule {
                PasswordRule::Lowercase => "una letra minúscula",
                PasswordRule::Uppercase => "una letra mayúscula",
                PasswordRule::Digit => "un número",
                PasswordRule::Special => "un carácter especial (@$!%*?&)",
            }
        ),
        Violation::NotInSet { allowed } => format!(
            "El valor de {s} no es válido. Opciones permitidas: {}.",
            allowed.join(", ")
        ),
        Violation::NotAnInteger => format!("El campo {s} debe ser un número entero."),
        Violation::NotANumber => format!("El campo {s} debe ser un número válido."),
        Violation::InvalidDate => {
            format!("El campo {s} debe ser una fecha válida (AAAA-MM-DD).")
        }
        Violation::InvalidDateTime => {
            format!("El campo {s} debe ser una fecha y hora válidas.")
        }
        Violation::InvalidPrice => "El precio debe ser un valor numérico válido \
                                    (por ejemplo: 25000 o $25000.00)."
            .into(),
        Violation::OutOfRange(bounds) => bounds_es(s, bounds),
        Violation::DateInFuture => format!("El campo {s} no puede ser una fecha futura."),
        Violation::DateBefore { min } => format!(
            "El campo {s} no puede ser anterior al {}.",
            min.format("%d/%m/%Y")
        ),
        Violation::DateTimeInPast => format!("El campo {s} no puede estar en el pasado."),
        Violation::DateBeforeToday => {
            format!("El campo {s} no puede ser anterior a la fecha de hoy.")
        }
        Violation::PasswordMismatch => "Las contraseñas no coinciden.".into(),
    }
}

fn charset_es(charset: Charset) -> &'static str {
    match charset {
        Charset::PersonName => "letras, espacios, guiones y apóstrofes",
        Charset::Letters => "letras y espacios",
        Charset::AlphanumericHyphen => "letras, números y guiones",
        Charset::Microchip => "letras, números, guiones, guiones bajos y puntos",
        Charset::Address => "letras, números, espacios y los símbolos # - . , ° /",
    }
}

fn bounds_es(s: &str, b: &Bounds) -> String {
    if b.min_exclusive {
        format!("El campo {s} debe ser mayor que {} y no superar {}.", b.min, b.max)
    } else {
        format!("El campo {s} debe estar entre {} y {}.", b.min, b.max)
    }
}

fn render_en(s: &str, violation: &Violation) -> String {
    match violation {
        Violation::SuspiciousContent => {
            format!("The {s} field contains suspicious content and cannot be processed.")
        }
        Violation::InappropriateContent => {
            format!("The {s} field contains inappropriate language.")
        }
        Violation::PredictablePattern => format!(
            "The {s} field must not contain repeated characters or predictable sequences \
             (for example 'aaaa', 'abc' or '123')."
        ),
        Violation::Required => format!("The {s} field is required."),
        Violation::TooShort { min } => {
            format!("The {s} field must be at least {min} characters long.")
        }
        Violation::TooLong { max } => {
            format!("The {s} field cannot exceed {max} characters.")
        }
        Violation::LengthOutOfRange { min, max } => {
            format!("The {s} field must be between {min} and {max} characters long.")
        }
        Violation::InvalidCharacters(charset) => {
            format!("The {s} field may only contain {}.", charset_en(*charset))
        }
        Violation::InvalidEmail => {
            "Enter a valid email address (for example: user@domain.com).".into()
        }
        Violation::GenericEmail => {
            "The email address looks generic or like a test account. Use a real one.".into()
        }
        Violation::InvalidPhone => "Enter a valid phone number: digits, spaces, hyphens, \
                                    parentheses and a leading '+' only."
            .into(),
        Violation::AddressRepeatedPunctuation => {
            "The address cannot contain consecutive punctuation marks.".into()
        }
        Violation::AddressEdgePunctuation => {
            "The address cannot start or end with a punctuation mark.".into()
        }
        Violation::AddressFormat => {
            "The address must follow the usual format, for example: Calle 45 #12-34.".into()
        }
        Violation::WeakPassword(rule) => format!(
            "The password must include at least {}.",
            match rule {
                PasswordRule::Lowercase => "one lowercase letter",
                PasswordRule::Uppercase => "one uppercase letter",
                PasswordRule::Digit => "one digit",
                PasswordRule::Special => "one special character (@$!%*?&)",
            }
        ),
        Violation::NotInSet { allowed } => format!(
            "The {s} value is not valid. Allowed options: {}.",
            allowed.join(", ")
        ),
        Violation::NotAnInteger => format!("The {s} field must be a whole number."),
        Violation::NotANumber => format!("The {s} field must be a valid number."),
        Violation::InvalidDate => format!("The {s} field must be a valid date (YYYY-MM-DD)."),
        Violation::InvalidDateTime => {
            format!("The {s} field must be a valid date and time.")
        }
        Violation::InvalidPrice => {
            "The price must be a valid amount (for example: 25000 or $25000.00).".into()
        }
        Violation::OutOfRange(bounds) => bounds_en(s, bounds),
        Violation::DateInFuture => format!("The {s} cannot be in the future."),
        Violation::DateBefore { min } => format!(
            "The {s} cannot be earlier than {}.",
            min.format("%Y-%m-%d")
        ),
        Violation::DateTimeInPast => format!("The {s} cannot be in the past."),
        Violation::DateBeforeToday => format!("The {s} cannot be earlier than today."),
        Violation::PasswordMismatch => "Passwords do not match.".into(),
    }
}

fn charset_en(charset: Charset) -> &'static str {
    match charset {
        Charset::PersonName => "letters, spaces, hyphens and apostrophes",
        Charset::Letters => "letters and spaces",
        Charset::AlphanumericHyphen => "letters, digits and hyphens",
        Charset::Microchip => "letters, digits, hyphens, underscores and dots",
        Charset::Address => "letters, digits, spaces and the symbols # - . , ° /",
    }
}

fn bounds_en(s: &str, b: &Bounds) -> String {
    if b.min_exclusive {
        format!("The {s} must be greater than {} and at most {}.", b.min, b.max)
    } else {
        format!("The {s} must be between {} and {}.", b.min, b.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn all_violations() -> Vec<Violation> {
        vec![
            Violation::SuspiciousContent,
            Violation::InappropriateContent,
            Violation::PredictablePattern,
            Violation::Required,
            Violation::TooShort { min: 3 },
            Violation::TooLong { max: 100 },
            Violation::LengthOutOfRange { min: 2, max: 50 },
            Violation::InvalidCharacters(Charset::Letters),
            Violation::InvalidEmail,
            Violation::GenericEmail,
            Violation::InvalidPhone,
            Violation::AddressRepeatedPunctuation,
            Violation::AddressEdgePunctuation,
            Violation::AddressFormat,
            Violation::WeakPassword(PasswordRule::Special),
            Violation::NotInSet { allowed: &["CC", "NIT"] },
            Violation::NotAnInteger,
            Violation::NotANumber,
            Violation::InvalidDate,
            Violation::InvalidDateTime,
            Violation::InvalidPrice,
            Violation::OutOfRange(Bounds::inclusive(35.0, 42.0)),
            Violation::DateInFuture,
            Violation::DateBefore {
                min: NaiveDate::from_ymd_opt(1900, 1, 1).unwrap(),
            },
            Violation::DateTimeInPast,
            Violation::DateBeforeToday,
            Violation::PasswordMismatch,
        ]
    }

    #[test]
    fn every_violation_renders_non_empty_in_every_locale() {
        for violation in all_violations() {
            for locale in [Locale::Es, Locale::En] {
                assert!(!render("campo", &violation, locale).trim().is_empty());
            }
        }
    }

    #[test]
    fn every_field_has_labels() {
        for field in Field::ALL {
            assert!(!label(*field, Locale::Es).is_empty());
            assert!(!label(*field, Locale::En).is_empty());
        }
    }

    #[test]
    fn spanish_messages_name_the_field() {
        let msg = render("apellido", &Violation::Required, Locale::Es);
        assert_eq!(msg, "El campo apellido es obligatorio.");
    }

    #[test]
    fn bounds_render_whole_numbers_without_decimals() {
        let msg = render(
            "temperatura",
            &Violation::OutOfRange(Bounds::inclusive(35.0, 42.0)),
            Locale::Es,
        );
        assert_eq!(msg, "El campo temperatura debe estar entre 35 y 42.");
    }

    #[test]
    fn set_violation_lists_options() {
        let msg = render(
            "document type",
            &Violation::NotInSet { allowed: &["CC", "CE"] },
            Locale::En,
        );
        assert!(msg.contains("CC, CE"));
    }
}
