//! Rules for pet records.

use crate::domain::entities::{Bounds, Charset};
use crate::domain::rules::checks::{self, Check};
use crate::domain::rules::patterns::{LETTERS_AND_SPACES, MICROCHIP};

pub const AGE_YEARS: Bounds = Bounds::inclusive(0.0, 30.0);
pub const WEIGHT_KG: Bounds = Bounds::above(0.0, 200.0);

/// `nombre_mascota`, `especie_mascota`.
pub fn required_name(value: &str) -> Check {
    checks::required(value)?;
    checks::length_between(value, 2, 100)?;
    checks::charset(value, &LETTERS_AND_SPACES, Charset::Letters)
}

/// `raza_mascota`, `color_mascota`.
pub fn optional_descriptor(value: &str) -> Check {
    if value.is_empty() {
        return Ok(());
    }
    checks::length_between(value, 2, 50)?;
    checks::charset(value, &LETTERS_AND_SPACES, Charset::Letters)
}

/// Age in whole years.
pub fn age(value: &str) -> Check {
    if value.is_empty() {
        return Ok(());
    }
    let years = checks::whole_number(value)?;
    checks::within(years, AGE_YEARS)
}

/// Weight in kilograms.
pub fn weight(value: &str) -> Check {
    if value.is_empty() {
        return Ok(());
    }
    checks::within(checks::number(value)?, WEIGHT_KG)
}

pub fn microchip(value: &str) -> Check {
    if value.is_empty() {
        return Ok(());
    }
    checks::length_between(value, 5, 50)?;
    checks::charset(value, &MICROCHIP, Charset::Microchip)
}

/// Foreign keys: `id_propietario_mascota` and the appointment ids.
pub fn required_id(value: &str) -> Check {
    checks::required(value)?;
    checks::integer(value).map(drop)
}

pub fn optional_id(value: &str) -> Check {
    if value.is_empty() {
        return Ok(());
    }
    checks::integer(value).map(drop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Violation;

    #[test]
    fn names_are_letters_only() {
        assert_eq!(required_name("Firulais"), Ok(()));
        assert_eq!(required_name("Perro"), Ok(()));
        assert_eq!(
            required_name("Rex 2"),
            Err(Violation::InvalidCharacters(Charset::Letters))
        );
        assert_eq!(required_name(""), Err(Violation::Required));
    }

    #[test]
    fn descriptors_are_optional() {
        assert_eq!(optional_descriptor(""), Ok(()));
        assert_eq!(optional_descriptor("Golden Retriever"), Ok(()));
        assert_eq!(
            optional_descriptor(&"a".repeat(51)),
            Err(Violation::LengthOutOfRange { min: 2, max: 50 })
        );
    }

    #[test]
    fn age_range() {
        assert_eq!(age("5"), Ok(()));
        assert_eq!(age("0"), Ok(()));
        assert_eq!(age("30"), Ok(()));
        assert_eq!(age("31"), Err(Violation::OutOfRange(AGE_YEARS)));
        assert_eq!(age("-1"), Err(Violation::OutOfRange(AGE_YEARS)));
        assert_eq!(age("2.5"), Err(Violation::NotAnInteger));
        assert_eq!(age("dos"), Err(Violation::NotANumber));
    }

    #[test]
    fn weight_range() {
        assert_eq!(weight("12.4"), Ok(()));
        assert_eq!(weight("200"), Ok(()));
        assert_eq!(weight("0"), Err(Violation::OutOfRange(WEIGHT_KG)));
        assert_eq!(weight("200.5"), Err(Violation::OutOfRange(WEIGHT_KG)));
    }

    #[test]
    fn microchip_charset() {
        assert_eq!(microchip("985-112_003.456"), Ok(()));
        assert_eq!(
            microchip("985 112"),
            Err(Violation::InvalidCharacters(Charset::Microchip))
        );
    }

    #[test]
    fn ids() {
        assert_eq!(required_id("17"), Ok(()));
        assert_eq!(required_id(""), Err(Violation::Required));
        assert_eq!(required_id("abc"), Err(Violation::NotAnInteger));
        assert_eq!(optional_id(""), Ok(()));
        assert_eq!(optional_id("3.5"), Err(Violation::NotAnInteger));
    }
}
