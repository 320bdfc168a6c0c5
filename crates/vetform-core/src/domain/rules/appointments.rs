//! Rules for appointments and clinical history entries.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::entities::{Bounds, Violation};
use crate::domain::rules::checks::{self, Check};
use crate::domain::value_objects::AppointmentStatus;

pub const BODY_WEIGHT_KG: Bounds = Bounds::above(0.0, 200.0);
pub const TEMPERATURE_C: Bounds = Bounds::inclusive(35.0, 42.0);

const NOTES_MAX: usize = 1000;

/// Required, and not earlier than `now`.
pub fn appointment_date(value: &str, now: NaiveDateTime) -> Check {
    checks::required(value)?;
    let at = checks::datetime(value)?;
    if at < now {
        return Err(Violation::DateTimeInPast);
    }
    Ok(())
}

pub fn status(value: &str) -> Check {
    checks::required(value)?;
    checks::one_of(value.parse::<AppointmentStatus>(), AppointmentStatus::ALL_CODES)
}

/// Appointment notes and the clinical free-text fields.
pub fn notes(value: &str) -> Check {
    checks::max_length(value, NOTES_MAX)
}

pub fn body_weight(value: &str) -> Check {
    if value.is_empty() {
        return Ok(());
    }
    checks::within(checks::number(value)?, BODY_WEIGHT_KG)
}

pub fn temperature(value: &str) -> Check {
    if value.is_empty() {
        return Ok(());
    }
    checks::within(checks::number(value)?, TEMPERATURE_C)
}

/// Optional follow-up date; today itself is allowed.
pub fn next_visit(value: &str, today: NaiveDate) -> Check {
    if value.is_empty() {
        return Ok(());
    }
    if checks::date(value)? < today {
        return Err(Violation::DateBeforeToday);
    }
    Ok(())
}
