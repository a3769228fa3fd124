//! Partial boundary-day detection.
//!
//! The day immediately before a premium window starts carries the premium
//! from 19:00, and the day the window runs into carries it until 07:00.
//! This module marks those days for the storhelg groups (Easter, Midsummer,
//! Christmas, New Year) and for the kvalificerad holidays (Epiphany, May
//! Day, Ascension), whose windows follow the same evening-to-morning shape.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{BoundarySide, ObClass, PartialBoundaryMark};

use super::easter::compute_easter;
use super::storhelg_period::midsummer_eve;
use super::weekday::{is_weekend, next_non_weekend};

fn mark(side: BoundarySide, period: &str, category: Option<ObClass>) -> PartialBoundaryMark {
    let time_text = match side {
        BoundarySide::Before => "från kl 19:00",
        BoundarySide::After => "till kl 07:00",
    };
    PartialBoundaryMark {
        side,
        period: period.to_string(),
        time_text: time_text.to_string(),
        category,
    }
}

/// Returns the partial boundary mark for the given day, if it borders a
/// premium window.
///
/// Checks run in a fixed order: Easter, Midsummer, Christmas, New Year
/// (both this year's window and the rollover from the previous year's),
/// then Epiphany, May Day and Ascension. The kvalificerad checks skip the
/// "day before" when it is itself a weekend, since the full-weekend rule
/// already covers it; the "day after" always applies the same
/// skip-past-weekend adjustment as the window ends. The Easter-group "day
/// before" carries no weekday guard.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use ob_engine::calculation::partial_storhelg_day;
/// use ob_engine::models::BoundarySide;
///
/// // Dec 23 is the evening before the Christmas window.
/// let day = NaiveDate::from_ymd_opt(2025, 12, 23).unwrap();
/// let mark = partial_storhelg_day(day).unwrap();
/// assert_eq!(mark.side, BoundarySide::Before);
/// assert_eq!(mark.period, "Julhelgen");
/// ```
pub fn partial_storhelg_day(date: NaiveDate) -> Option<PartialBoundaryMark> {
    let year = date.year();
    let easter = compute_easter(year);

    // Easter: day before Good Friday, day after Easter Monday.
    let day_before_easter = easter - Duration::days(3);
    let day_after_easter = easter + Duration::days(2);
    if date == day_before_easter {
        return Some(mark(BoundarySide::Before, "Påskhelgen", None));
    }
    if date == day_after_easter {
        return Some(mark(BoundarySide::After, "Påskhelgen", None));
    }

    // Midsummer: day before the eve, day after the Sunday following
    // Midsummer Day.
    let eve = midsummer_eve(year);
    if date == eve - Duration::days(1) {
        return Some(mark(BoundarySide::Before, "Midsommar", None));
    }
    if date == eve + Duration::days(3) {
        return Some(mark(BoundarySide::After, "Midsommar", None));
    }

    // Christmas: Dec 23, and the weekend-adjusted day after Boxing Day.
    let day_before_christmas = NaiveDate::from_ymd_opt(year, 12, 23).expect("valid date");
    let boxing_day = NaiveDate::from_ymd_opt(year, 12, 26).expect("valid date");
    let day_after_christmas = next_non_weekend(boxing_day + Duration::days(1));
    if date == day_before_christmas {
        return Some(mark(BoundarySide::Before, "Julhelgen", None));
    }
    if date == day_after_christmas {
        return Some(mark(BoundarySide::After, "Julhelgen", None));
    }

    // New Year: Dec 30 before, and the weekend-adjusted day after Jan 1.
    // The "after" day of this year's window lands in the next year, so the
    // rollover from the previous year's window is checked separately below.
    let day_before_new_year = NaiveDate::from_ymd_opt(year, 12, 30).expect("valid date");
    let next_new_years_day = NaiveDate::from_ymd_opt(year + 1, 1, 1).expect("valid date");
    let day_after_new_year = next_non_weekend(next_new_years_day + Duration::days(1));
    if date == day_before_new_year {
        return Some(mark(BoundarySide::Before, "Nyårshelgen", None));
    }
    if date == day_after_new_year {
        return Some(mark(BoundarySide::After, "Nyårshelgen", None));
    }

    let new_years_day = NaiveDate::from_ymd_opt(year, 1, 1).expect("valid date");
    let day_after_prev_new_year = next_non_weekend(new_years_day + Duration::days(1));
    if date == day_after_prev_new_year {
        return Some(mark(BoundarySide::After, "Nyårshelgen", None));
    }

    // Epiphany: Jan 5 before (unless itself a weekend), weekend-adjusted
    // Jan 7 after.
    let day_before_epiphany = NaiveDate::from_ymd_opt(year, 1, 5).expect("valid date");
    let day_after_epiphany =
        next_non_weekend(NaiveDate::from_ymd_opt(year, 1, 7).expect("valid date"));
    if date == day_before_epiphany && !is_weekend(day_before_epiphany) {
        return Some(mark(BoundarySide::Before, "Trettondagen", Some(ObClass::Kvalificerad)));
    }
    if date == day_after_epiphany {
        return Some(mark(BoundarySide::After, "Trettondagen", Some(ObClass::Kvalificerad)));
    }

    // May Day: Apr 30 before (unless itself a weekend), weekend-adjusted
    // May 2 after.
    let day_before_may_day = NaiveDate::from_ymd_opt(year, 4, 30).expect("valid date");
    let day_after_may_day =
        next_non_weekend(NaiveDate::from_ymd_opt(year, 5, 2).expect("valid date"));
    if date == day_before_may_day && !is_weekend(day_before_may_day) {
        return Some(mark(BoundarySide::Before, "Första maj", Some(ObClass::Kvalificerad)));
    }
    if date == day_after_may_day {
        return Some(mark(BoundarySide::After, "Första maj", Some(ObClass::Kvalificerad)));
    }

    // Ascension: the Wednesday before, and the weekend-adjusted day after.
    let ascension = easter + Duration::days(39);
    let day_before_ascension = ascension - Duration::days(1);
    let day_after_ascension = next_non_weekend(ascension + Duration::days(1));
    if date == day_before_ascension && !is_weekend(day_before_ascension) {
        return Some(mark(
            BoundarySide::Before,
            "Kristi himmelsfärdsdag",
            Some(ObClass::Kvalificerad),
        ));
    }
    if date == day_after_ascension {
        return Some(mark(
            BoundarySide::After,
            "Kristi himmelsfärdsdag",
            Some(ObClass::Kvalificerad),
        ));
    }

    None
}
