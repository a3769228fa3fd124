//! OB rate lookup.
//!
//! The agreement revises the three OB supplements once, on 2025-05-01.
//! Lookup is a pure two-way selection on the query date; there are no other
//! cutoffs and no interpolation.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::ObRates;

/// Returns the OB supplements in force on the given date.
///
/// Dates before 2025-05-01 use the 2024 rate triple, dates on or after it
/// use the revised triple.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use ob_engine::calculation::ob_rates;
///
/// let before = ob_rates(NaiveDate::from_ymd_opt(2025, 4, 30).unwrap());
/// assert_eq!(before.enkel, Decimal::new(2382, 2));
///
/// let after = ob_rates(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
/// assert_eq!(after.enkel, Decimal::new(2449, 2));
/// ```
pub fn ob_rates(date: NaiveDate) -> ObRates {
    let cutoff = NaiveDate::from_ymd_opt(2025, 5, 1).expect("the rate cutoff is a valid date");

    if date < cutoff {
        ObRates {
            enkel: Decimal::new(2382, 2),
            kvalificerad: Decimal::new(5320, 2),
            storhelg: Decimal::new(11953, 2),
        }
    } else {
        ObRates {
            enkel: Decimal::new(2449, 2),
            kvalificerad: Decimal::new(5469, 2),
            storhelg: Decimal::new(12288, 2),
        }
    }
}
