//! Storhelg membership testing.
//!
//! Determines whether an arbitrary calendar day falls inside any of the
//! year's storhelg windows. The New Year window spans the year boundary, so
//! days in early January must also be tested against the previous year's
//! window.

use chrono::{Datelike, NaiveDate};

use crate::models::StorhelgPeriod;

use super::storhelg_period::{
    christmas_window, easter_window, midsummer_window, national_day_window, new_year_window,
};

/// Returns the storhelg window containing the given day, if any.
///
/// The day is tested at implicit midnight against each window's half-open
/// `[start, end)` interval, in a fixed order: Easter, National Day,
/// Midsummer, Christmas, this year's New Year window and finally the
/// previous year's New Year window. The first match wins. The previous-year
/// check is what classifies Jan 1-2 correctly.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use ob_engine::calculation::is_within_storhelg;
///
/// // Jan 1 is inside the New Year window that started the previous December.
/// let new_years_day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let period = is_within_storhelg(new_years_day).unwrap();
/// assert_eq!(period.label, "Nyårshelgen");
///
/// let ordinary = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
/// assert!(is_within_storhelg(ordinary).is_none());
/// ```
pub fn is_within_storhelg(date: NaiveDate) -> Option<StorhelgPeriod> {
    let instant = date.and_hms_opt(0, 0, 0).expect("midnight is a valid time");
    let year = date.year();

    let windows = [
        easter_window(year),
        national_day_window(year),
        midsummer_window(year),
        christmas_window(year),
        new_year_window(year),
        new_year_window(year - 1),
    ];

    windows.into_iter().find(|window| window.contains(instant))
}
