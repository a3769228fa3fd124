//! Gregorian Easter computation.
//!
//! Every moving holiday in both the Swedish and Norwegian systems is a fixed
//! day offset from Easter Sunday, so this single function anchors all of them:
//! Maundy Thursday −3, Good Friday −2, Easter Eve −1, Easter Monday +1,
//! Ascension +39, Pentecost +49, Whit Monday +50.

use chrono::NaiveDate;

/// Computes the date of Easter Sunday for a given year.
///
/// Implements the Meeus/Jones/Butcher algorithm, valid for any Gregorian
/// year. Pure integer arithmetic, no failure modes.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use ob_engine::calculation::compute_easter;
///
/// assert_eq!(compute_easter(2025), NaiveDate::from_ymd_opt(2025, 4, 20).unwrap());
/// assert_eq!(compute_easter(2024), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
/// ```
pub fn compute_easter(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .expect("the algorithm only yields dates in late March or April")
}
