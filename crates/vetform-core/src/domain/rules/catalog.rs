//! Rules for the service catalogue (consultations, vaccines, grooming...).

use crate::domain::entities::Violation;
use crate::domain::rules::checks::{self, Check};
use crate::domain::rules::patterns::PRICE;

pub fn service_name(value: &str) -> Check {
    checks::required(value)?;
    checks::length_between(value, 3, 100)
}

pub fn service_description(value: &str) -> Check {
    checks::required(value)?;
    checks::length_between(value, 10, 500)
}

/// Optional `$`, digits, optional two decimals: `25000`, `$25000.00`.
pub fn price(value: &str) -> Check {
    checks::required(value)?;
    if PRICE.is_match(value) {
        Ok(())
    } else {
        Err(Violation::InvalidPrice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_lengths() {
        assert_eq!(service_name("Vacunación"), Ok(()));
        assert_eq!(
            service_name("Ba"),
            Err(Violation::LengthOutOfRange { min: 3, max: 100 })
        );
        assert_eq!(service_description("Baño y corte de uñas"), Ok(()));
        assert_eq!(
            service_description("Corto"),
            Err(Violation::LengthOutOfRange { min: 10, max: 500 })
        );
    }

    #[test]
    fn price_shape() {
        assert_eq!(price("45000"), Ok(()));
        assert_eq!(price("$45000.50"), Ok(()));
        assert_eq!(price("45.000"), Err(Violation::InvalidPrice));
        assert_eq!(price(""), Err(Violation::Required));
    }
}
