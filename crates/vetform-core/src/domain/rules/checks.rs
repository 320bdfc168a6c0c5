//! Building blocks shared by the field rules.
//!
//! Lengths are counted in characters, not bytes, so accented names measure
//! the way the user typed them.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::domain::entities::{Bounds, Charset, Violation};

pub type Check = Result<(), Violation>;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn required(value: &str) -> Check {
    if value.is_empty() {
        Err(Violation::Required)
    } else {
        Ok(())
    }
}

pub fn length_between(value: &str, min: usize, max: usize) -> Check {
    let len = char_len(value);
    if len < min || len > max {
        Err(Violation::LengthOutOfRange { min, max })
    } else {
        Ok(())
    }
}

pub fn min_length(value: &str, min: usize) -> Check {
    if char_len(value) < min {
        Err(Violation::TooShort { min })
    } else {
        Ok(())
    }
}

pub fn max_length(value: &str, max: usize) -> Check {
    if char_len(value) > max {
        Err(Violation::TooLong { max })
    } else {
        Ok(())
    }
}

pub fn charset(value: &str, pattern: &Regex, charset: Charset) -> Check {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(Violation::InvalidCharacters(charset))
    }
}

/// `parsed` is the outcome of parsing the value into its enum.
pub fn one_of<T, E>(parsed: Result<T, E>, allowed: &'static [&'static str]) -> Check {
    if parsed.is_ok() {
        Ok(())
    } else {
        Err(Violation::NotInSet { allowed })
    }
}

/// Whole number, no sign games: `"12"` passes, `"12abc"` and `"1.5"` fail.
pub fn integer(value: &str) -> Result<i64, Violation> {
    value.parse::<i64>().map_err(|_| Violation::NotAnInteger)
}

/// Finite decimal number.
pub fn number(value: &str) -> Result<f64, Violation> {
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(Violation::NotANumber),
    }
}

/// A number with no fractional part (`"5"` and `"5.0"` both pass).
pub fn whole_number(value: &str) -> Result<f64, Violation> {
    let n = number(value)?;
    if n.fract() == 0.0 {
        Ok(n)
    } else {
        Err(Violation::NotAnInteger)
    }
}

pub fn within(n: f64, bounds: Bounds) -> Check {
    if bounds.contains(n) {
        Ok(())
    } else {
        Err(Violation::OutOfRange(bounds))
    }
}

/// Calendar date; a date-time is accepted and truncated to its date.
pub fn date(value: &str) -> Result<NaiveDate, Violation> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| parse_datetime(value).map(|dt| dt.date()))
        .ok_or(Violation::InvalidDate)
}

/// Local date-time as sent by `<input type="datetime-local">` and friends.
///
/// RFC 3339 input (`toISOString()` output included) keeps its wall-clock
/// part and drops the offset, the same reading `FixedClock` gives `--now`.
pub fn datetime(value: &str) -> Result<NaiveDateTime, Violation> {
    parse_datetime(value).ok_or(Violation::InvalidDateTime)
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|d| d.naive_local())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_count_characters() {
        assert_eq!(char_len("Ñandú"), 5);
        assert!(length_between("Ñu", 2, 50).is_ok());
        assert_eq!(
            length_between("A", 2, 50),
            Err(Violation::LengthOutOfRange { min: 2, max: 50 })
        );
    }

    #[test]
    fn integer_is_strict() {
        assert_eq!(integer("42"), Ok(42));
        assert_eq!(integer("-3"), Ok(-3));
        assert_eq!(integer("4.2"), Err(Violation::NotAnInteger));
        assert_eq!(integer("12abc"), Err(Violation::NotAnInteger));
    }

    #[test]
    fn number_rejects_non_finite() {
        assert_eq!(number("12.5"), Ok(12.5));
        assert_eq!(number("inf"), Err(Violation::NotANumber));
        assert_eq!(number("NaN"), Err(Violation::NotANumber));
        assert_eq!(number("doce"), Err(Violation::NotANumber));
    }

    #[test]
    fn whole_number_accepts_trailing_zero() {
        assert_eq!(whole_number("5.0"), Ok(5.0));
        assert_eq!(whole_number("5.5"), Err(Violation::NotAnInteger));
    }

    #[test]
    fn date_accepts_iso_and_day_first() {
        let expected = NaiveDate::from_ymd_opt(2020, 3, 9).unwrap();
        assert_eq!(date("2020-03-09"), Ok(expected));
        assert_eq!(date("09/03/2020"), Ok(expected));
        assert_eq!(date("2020-03-09T10:00"), Ok(expected));
        assert_eq!(date("2020-02-30"), Err(Violation::InvalidDate));
        assert_eq!(date("ayer"), Err(Violation::InvalidDate));
    }

    #[test]
    fn datetime_accepts_local_input_formats() {
        assert!(datetime("2026-05-01T09:30").is_ok());
        assert!(datetime("2026-05-01 09:30:15").is_ok());
        assert!(datetime("2026-05-01T09:30:15.250").is_ok());
        assert_eq!(datetime("2026-05-01"), Err(Violation::InvalidDateTime));
    }

    #[test]
    fn datetime_accepts_rfc3339_with_offset() {
        let expected = NaiveDate::from_ymd_opt(2030, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        assert_eq!(datetime("2030-01-01T10:00:00.000Z"), Ok(expected));
        assert_eq!(datetime("2030-01-01T10:00:00Z"), Ok(expected));
        assert_eq!(datetime("2030-01-01T10:00:00-05:00"), Ok(expected));
        assert_eq!(datetime("2030-01-01T10:00:00 UTC"), Err(Violation::InvalidDateTime));
    }
}
