//! Clock adapters.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use vetform_core::{application::ports::Clock, domain::DomainError};

/// Production clock: the machine's local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stopped at one instant, for tests and reproducible runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

const LOCAL_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }

    /// Parse a frozen instant.
    ///
    /// Accepts RFC 3339 (the wall-clock part is kept, the offset dropped),
    /// `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM[:SS]`, or a bare date
    /// (midnight).
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let input = input.trim();

        if let Ok(at) = DateTime::parse_from_rfc3339(input) {
            return Ok(Self(at.naive_local()));
        }
        if let Some(at) = LOCAL_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        {
            return Ok(Self(at));
        }
        if let Some(at) = NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            return Ok(Self(at));
        }

        Err(DomainError::InvalidTimestamp {
            value: input.to_string(),
            reason: "expected RFC 3339 or YYYY-MM-DD HH:MM:SS".into(),
        })
    }

    pub fn instant(&self) -> NaiveDateTime {
        self.0
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn parses_local_timestamp() {
        let clock = FixedClock::parse("2026-03-15 10:30:00").unwrap();
        assert_eq!(clock.now(), ymd_hms(2026, 3, 15, 10, 30, 0));
    }

    #[test]
    fn rfc3339_keeps_wall_clock() {
        let clock = FixedClock::parse("2026-03-15T10:30:00-05:00").unwrap();
        assert_eq!(clock.now(), ymd_hms(2026, 3, 15, 10, 30, 0));
    }

    #[test]
    fn bare_date_is_midnight() {
        let clock = FixedClock::parse("2026-03-15").unwrap();
        assert_eq!(clock.instant(), ymd_hms(2026, 3, 15, 0, 0, 0));
    }

    #[test]
    fn rejects_garbage() {
        let err = FixedClock::parse("mañana").unwrap_err();
        assert!(matches!(err, DomainError::InvalidTimestamp { .. }));
    }

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock::new();
        let first = clock.now();
        assert!(clock.now() >= first);
    }
}
