//! Rules for people: clients, veterinarians and their accounts.

use chrono::NaiveDate;

use crate::domain::entities::{Charset, FormContext, PasswordRule, ValidationFlags, Violation};
use crate::domain::rules::checks::{self, Check};
use crate::domain::rules::patterns::{
    ADDRESS_CHARSET, ADDRESS_EDGE_PUNCTUATION, ADDRESS_REPEATED_PUNCTUATION,
    ALPHANUMERIC_HYPHEN, COLOMBIAN_ADDRESS, EMAIL, GENERIC_EMAIL, PERSON_NAME, PHONE,
};
use crate::domain::value_objects::DocumentType;

const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// `nombre`, `apellido`.
pub fn person_name(value: &str) -> Check {
    checks::required(value)?;
    checks::length_between(value, 2, 50)?;
    checks::charset(value, &PERSON_NAME, Charset::PersonName)
}

/// The genericness heuristic is skipped when editing a record whose email
/// did not change, so legacy addresses do not block unrelated edits.
pub fn email(value: &str, flags: &ValidationFlags) -> Check {
    checks::required(value)?;
    if !EMAIL.is_match(value) {
        return Err(Violation::InvalidEmail);
    }
    checks::max_length(value, 100)?;

    let changed = value != flags.original_email.trim();
    if (flags.is_new_entry || changed) && GENERIC_EMAIL.is_match(value) {
        return Err(Violation::GenericEmail);
    }
    Ok(())
}

pub fn phone(value: &str) -> Check {
    checks::required(value)?;
    if !PHONE.is_match(value) {
        return Err(Violation::InvalidPhone);
    }
    checks::length_between(value, 7, 20)
}

/// Optional. When present it must look like a Colombian street address,
/// e.g. `Calle 45 #12-34`.
pub fn address(value: &str) -> Check {
    if value.is_empty() {
        return Ok(());
    }
    checks::length_between(value, 5, 100)?;
    checks::charset(value, &ADDRESS_CHARSET, Charset::Address)?;
    if ADDRESS_REPEATED_PUNCTUATION.is_match(value) {
        return Err(Violation::AddressRepeatedPunctuation);
    }
    if ADDRESS_EDGE_PUNCTUATION.is_match(value) {
        return Err(Violation::AddressEdgePunctuation);
    }
    if !COLOMBIAN_ADDRESS.is_match(value) {
        return Err(Violation::AddressFormat);
    }
    Ok(())
}

/// Required on creation; on edit an empty value means "keep the current one".
pub fn password(value: &str, flags: &ValidationFlags) -> Check {
    if value.is_empty() {
        return if flags.is_new_entry {
            Err(Violation::Required)
        } else {
            Ok(())
        };
    }
    checks::min_length(value, 8)?;

    let rules: [(PasswordRule, fn(char) -> bool); 4] = [
        (PasswordRule::Lowercase, |c| c.is_lowercase()),
        (PasswordRule::Uppercase, |c| c.is_uppercase()),
        (PasswordRule::Digit, |c| c.is_ascii_digit()),
        (PasswordRule::Special, |c| PASSWORD_SPECIALS.contains(c)),
    ];
    for (rule, test) in rules {
        if !value.chars().any(test) {
            return Err(Violation::WeakPassword(rule));
        }
    }
    Ok(())
}

/// Must repeat `context["password"]` exactly, untrimmed.
///
/// On edit, an empty confirmation is fine only while the password itself is
/// also left blank.
pub fn confirm_password(value: &str, context: &FormContext, flags: &ValidationFlags) -> Check {
    let password = context.get("password").unwrap_or_default();

    if value.is_empty() {
        return if flags.is_new_entry || !password.trim().is_empty() {
            Err(Violation::Required)
        } else {
            Ok(())
        };
    }
    if value != password {
        return Err(Violation::PasswordMismatch);
    }
    Ok(())
}

pub fn document_type(value: &str) -> Check {
    if value.is_empty() {
        return Ok(());
    }
    checks::one_of(value.parse::<DocumentType>(), DocumentType::ALL_CODES)
}

pub fn document_number(value: &str) -> Check {
    if value.is_empty() {
        return Ok(());
    }
    checks::length_between(value, 5, 20)?;
    checks::charset(value, &ALPHANUMERIC_HYPHEN, Charset::AlphanumericHyphen)
}

/// Optional; between 1900-01-01 and `today`, both inclusive.
pub fn birth_date(value: &str, today: NaiveDate) -> Check {
    if value.is_empty() {
        return Ok(());
    }
    let date = checks::date(value)?;
    if date > today {
        return Err(Violation::DateInFuture);
    }
    let earliest = earliest_birth_date();
    if date < earliest {
        return Err(Violation::DateBefore { min: earliest });
    }
    Ok(())
}

fn earliest_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// `experiencia`, `universidad`, `horario`: optional free text.
pub fn profile_text(value: &str, max: usize) -> Check {
    if value.is_empty() {
        return Ok(());
    }
    checks::min_length(value, 3)?;
    checks::max_length(value, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    #[test]
    fn person_names_accept_spanish_letters() {
        assert_eq!(person_name("José Ñúñez"), Ok(()));
        assert_eq!(person_name("O'Connor-Díaz"), Ok(()));
        assert_eq!(person_name(""), Err(Violation::Required));
        assert_eq!(
            person_name("J"),
            Err(Violation::LengthOutOfRange { min: 2, max: 50 })
        );
        assert_eq!(
            person_name("R2D2"),
            Err(Violation::InvalidCharacters(Charset::PersonName))
        );
    }

    #[test]
    fn email_format_and_length() {
        let flags = ValidationFlags::new_entry();
        assert_eq!(email("not-an-email", &flags), Err(Violation::InvalidEmail));
        assert_eq!(email("ana@clinica.co", &flags), Ok(()));

        let long = format!("{}@clinica.co", "a".repeat(95));
        assert_eq!(email(&long, &flags), Err(Violation::TooLong { max: 100 }));
    }

    #[test]
    fn generic_email_rejected_on_new_entries() {
        let flags = ValidationFlags::new_entry();
        assert_eq!(email("user@example.com", &flags), Err(Violation::GenericEmail));
        assert_eq!(email("test@gmail.com", &flags), Err(Violation::GenericEmail));
        assert_eq!(email("ana@prueba.co", &flags), Err(Violation::GenericEmail));
        assert_eq!(email("user@mycompany.co", &flags), Ok(()));
    }

    #[test]
    fn generic_email_allowed_when_unchanged_on_edit() {
        let flags = ValidationFlags::editing("admin@veterinaria.com");
        assert_eq!(email("admin@veterinaria.com", &flags), Ok(()));

        let changed = ValidationFlags::editing("ana@clinica.co");
        assert_eq!(
            email("admin@veterinaria.com", &changed),
            Err(Violation::GenericEmail)
        );
    }

    #[test]
    fn phone_rules() {
        assert_eq!(phone("+57 (300) 555-1234"), Ok(()));
        assert_eq!(phone("3005551234"), Ok(()));
        assert_eq!(phone("300-abc"), Err(Violation::InvalidPhone));
        assert_eq!(
            phone("12345"),
            Err(Violation::LengthOutOfRange { min: 7, max: 20 })
        );
        assert_eq!(phone(""), Err(Violation::Required));
    }

    #[test]
    fn address_rules() {
        assert_eq!(address(""), Ok(()));
        assert_eq!(address("Calle 45 #12-34"), Ok(()));
        assert_eq!(address("Carrera 7 # 32-16, Bogotá"), Ok(()));
        assert_eq!(
            address("Calle 45 ##12-34"),
            Err(Violation::AddressRepeatedPunctuation)
        );
        assert_eq!(
            address("#Calle 45 12-34"),
            Err(Violation::AddressEdgePunctuation)
        );
        assert_eq!(address("Calle 45 #12-34."), Err(Violation::AddressEdgePunctuation));
        assert_eq!(address("Mi casa azul"), Err(Violation::AddressFormat));
        assert_eq!(
            address("Calle 45 @ 12"),
            Err(Violation::InvalidCharacters(Charset::Address))
        );
        assert_eq!(
            address("Cl 1"),
            Err(Violation::LengthOutOfRange { min: 5, max: 100 })
        );
    }

    #[test]
    fn password_complexity() {
        let new = ValidationFlags::new_entry();
        assert_eq!(password("Abcdef1!", &new), Ok(()));
        assert_eq!(password("Ab1!", &new), Err(Violation::TooShort { min: 8 }));
        assert_eq!(
            password("ABCDEFG1!", &new),
            Err(Violation::WeakPassword(PasswordRule::Lowercase))
        );
        assert_eq!(
            password("abcdefgh", &new),
            Err(Violation::WeakPassword(PasswordRule::Uppercase))
        );
        assert_eq!(
            password("Abcdefgh!", &new),
            Err(Violation::WeakPassword(PasswordRule::Digit))
        );
        assert_eq!(
            password("Abcdefgh1", &new),
            Err(Violation::WeakPassword(PasswordRule::Special))
        );
    }

    #[test]
    fn password_optional_when_editing() {
        assert_eq!(password("", &ValidationFlags::editing("a@b.co")), Ok(()));
        assert_eq!(password("", &ValidationFlags::new_entry()), Err(Violation::Required));
        assert_eq!(
            password("short", &ValidationFlags::editing("a@b.co")),
            Err(Violation::TooShort { min: 8 })
        );
    }

    #[test]
    fn confirmation_must_match() {
        let new = ValidationFlags::new_entry();
        let ctx = FormContext::new().with("password", "Y");
        assert_eq!(confirm_password("X", &ctx, &new), Err(Violation::PasswordMismatch));
        assert_eq!(confirm_password("Y", &ctx, &new), Ok(()));
        assert_eq!(confirm_password("", &ctx, &new), Err(Violation::Required));
    }

    #[test]
    fn confirmation_compares_against_untrimmed_password() {
        let new = ValidationFlags::new_entry();
        let ctx = FormContext::new().with("password", "Zq9!Kpw7  ");
        assert_eq!(
            confirm_password("Zq9!Kpw7", &ctx, &new),
            Err(Violation::PasswordMismatch)
        );

        let edit = ValidationFlags::editing("a@b.co");
        let blank = FormContext::new().with("password", "   ");
        assert_eq!(confirm_password("", &blank, &edit), Ok(()));
    }

    #[test]
    fn confirmation_optional_on_edit_without_new_password() {
        let edit = ValidationFlags::editing("a@b.co");
        assert_eq!(confirm_password("", &FormContext::new(), &edit), Ok(()));

        let changing = FormContext::new().with("password", "Nuevo1!x");
        assert_eq!(confirm_password("", &changing, &edit), Err(Violation::Required));
    }

    #[test]
    fn document_rules() {
        assert_eq!(document_type(""), Ok(()));
        assert_eq!(document_type("PASAPORTE"), Ok(()));
        assert!(matches!(
            document_type("DNI"),
            Err(Violation::NotInSet { .. })
        ));
        assert_eq!(document_number("1020-304050"), Ok(()));
        assert_eq!(
            document_number("12 345"),
            Err(Violation::InvalidCharacters(Charset::AlphanumericHyphen))
        );
    }

    #[test]
    fn birth_date_bounds() {
        assert_eq!(birth_date("1990-06-01", today()), Ok(()));
        assert_eq!(birth_date("2026-03-15", today()), Ok(()));
        assert_eq!(birth_date("2026-03-16", today()), Err(Violation::DateInFuture));
        assert!(matches!(
            birth_date("1899-12-31", today()),
            Err(Violation::DateBefore { .. })
        ));
        assert_eq!(birth_date("31-31-1990", today()), Err(Violation::InvalidDate));
    }

    #[test]
    fn profile_text_bounds() {
        assert_eq!(profile_text("", 100), Ok(()));
        assert_eq!(profile_text("ab", 100), Err(Violation::TooShort { min: 3 }));
        assert_eq!(
            profile_text(&"x".repeat(101), 100),
            Err(Violation::TooLong { max: 100 })
        );
        assert_eq!(profile_text(&"x".repeat(255), 255), Ok(()));
    }
}
