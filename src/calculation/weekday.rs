//! Weekend helpers shared across the period computations.
//!
//! The Christmas and New Year window ends, and every "day after" boundary
//! computation, push forward past weekends. That skip loop lives here as one
//! shared primitive so all call sites agree on its behavior.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Returns true if the date is a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns the first non-weekend day at or after the given date.
///
/// The date itself is returned unchanged when it is already a weekday;
/// a Saturday or Sunday advances to the following Monday.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use ob_engine::calculation::next_non_weekend;
///
/// // Dec 27, 2025 is a Saturday; the next weekday is Monday Dec 29.
/// let saturday = NaiveDate::from_ymd_opt(2025, 12, 27).unwrap();
/// assert_eq!(next_non_weekend(saturday), NaiveDate::from_ymd_opt(2025, 12, 29).unwrap());
///
/// // A Tuesday stays put.
/// let tuesday = NaiveDate::from_ymd_opt(2025, 12, 30).unwrap();
/// assert_eq!(next_non_weekend(tuesday), tuesday);
/// ```
pub fn next_non_weekend(date: NaiveDate) -> NaiveDate {
    let mut day = date;
    while is_weekend(day) {
        day = day + Duration::days(1);
    }
    day
}
