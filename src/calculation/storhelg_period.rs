//! Storhelg period resolution.
//!
//! § 10 Mom 1 defines five major-holiday premium windows per year: Easter,
//! National Day, Midsummer, Christmas and New Year. This module constructs
//! their exact boundary instants and resolves a holiday name to the window
//! it triggers.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

use crate::models::StorhelgPeriod;

use super::easter::compute_easter;
use super::weekday::next_non_weekend;

/// Swedish short month names used in period descriptions.
const MONTH_NAMES_SHORT: [&str; 12] = [
    "jan", "feb", "mar", "apr", "maj", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
];

fn at(date: NaiveDate, hour: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, 0, 0).expect("whole hours are valid times")
}

/// Formats the standard evening-to-morning window description, e.g.
/// `"Julhelgen: 23 dec kl 19:00 → 29 dec kl 07:00"`.
fn describe(label: &str, start_day: NaiveDate, end_day: NaiveDate) -> String {
    format!(
        "{label}: {} {} kl 19:00 → {} {} kl 07:00",
        start_day.day(),
        MONTH_NAMES_SHORT[start_day.month0() as usize],
        end_day.day(),
        MONTH_NAMES_SHORT[end_day.month0() as usize],
    )
}

fn evening_to_morning(label: &str, start_day: NaiveDate, end_day: NaiveDate) -> StorhelgPeriod {
    StorhelgPeriod {
        label: label.to_string(),
        start: at(start_day, 19),
        end: at(end_day, 7),
        description: describe(label, start_day, end_day),
    }
}

/// Midsummer Eve: the first Friday of June 19-25.
///
/// Note this searches for the eve directly, unlike the holiday table builder
/// which finds Midsummer Day (the Saturday) first. Both land on the same
/// weekend.
pub(crate) fn midsummer_eve(year: i32) -> NaiveDate {
    for day in 19..=25 {
        let date = NaiveDate::from_ymd_opt(year, 6, day).expect("June 19-25 are valid dates");
        if date.weekday() == Weekday::Fri {
            return date;
        }
    }
    unreachable!("a seven-day window always contains a Friday")
}

/// The Easter window: the day before Good Friday at 19:00 until the day
/// after Easter Monday at 07:00.
pub(crate) fn easter_window(year: i32) -> StorhelgPeriod {
    let easter = compute_easter(year);
    let start_day = easter - Duration::days(3);
    let end_day = easter + Duration::days(2);
    evening_to_morning("Påskhelgen", start_day, end_day)
}

/// The National Day window: June 6, 00:00-24:00, with no evening-before
/// extension.
pub(crate) fn national_day_window(year: i32) -> StorhelgPeriod {
    let day = NaiveDate::from_ymd_opt(year, 6, 6).expect("June 6 is a valid date");
    StorhelgPeriod {
        label: "Nationaldagen".to_string(),
        start: at(day, 0),
        end: at(day + Duration::days(1), 0),
        description: "Nationaldagen: 6 juni kl 00:00 → 24:00".to_string(),
    }
}

/// The Midsummer window: the day before Midsummer Eve at 19:00 until two
/// days after Midsummer Day at 07:00.
pub(crate) fn midsummer_window(year: i32) -> StorhelgPeriod {
    let eve = midsummer_eve(year);
    let start_day = eve - Duration::days(1);
    let end_day = eve + Duration::days(3);
    evening_to_morning("Midsommar", start_day, end_day)
}

/// The Christmas window: Dec 23 at 19:00 until the first non-weekend day
/// strictly after Boxing Day at 07:00.
pub(crate) fn christmas_window(year: i32) -> StorhelgPeriod {
    let start_day = NaiveDate::from_ymd_opt(year, 12, 23).expect("Dec 23 is a valid date");
    let boxing_day = NaiveDate::from_ymd_opt(year, 12, 26).expect("Dec 26 is a valid date");
    let end_day = next_non_weekend(boxing_day + Duration::days(1));
    evening_to_morning("Julhelgen", start_day, end_day)
}

/// The New Year window: Dec 30 at 19:00 until the first non-weekend day
/// strictly after New Year's Day of the following year at 07:00.
pub(crate) fn new_year_window(year: i32) -> StorhelgPeriod {
    let start_day = NaiveDate::from_ymd_opt(year, 12, 30).expect("Dec 30 is a valid date");
    let new_years_day = NaiveDate::from_ymd_opt(year + 1, 1, 1).expect("Jan 1 is a valid date");
    let end_day = next_non_weekend(new_years_day + Duration::days(1));
    evening_to_morning("Nyårshelgen", start_day, end_day)
}

const EASTER_NAMES: [&str; 7] = [
    "långfredagen",
    "langfredag",
    "påskafton",
    "påskdagen",
    "første påskedag",
    "annandag påsk",
    "andre påskedag",
];

const CHRISTMAS_NAMES: [&str; 5] = [
    "julafton",
    "juldagen",
    "første juledag",
    "annandag jul",
    "andre juledag",
];

const NEW_YEAR_NAMES: [&str; 3] = ["nyårsafton", "nyårsdagen", "nyttårsdag"];

/// Resolves a holiday name to the storhelg window it triggers in the given
/// year.
///
/// Dispatch is a case-insensitive substring match against the five holiday
/// groups, accepting both the Swedish and Norwegian name variants. Returns
/// `None` when the name matches none of the groups, which is a normal
/// outcome for lesser holidays.
///
/// # Example
///
/// ```
/// use ob_engine::calculation::storhelg_period;
///
/// let period = storhelg_period("Långfredagen", 2025).unwrap();
/// assert_eq!(period.label, "Påskhelgen");
/// assert_eq!(
///     period.description,
///     "Påskhelgen: 17 apr kl 19:00 → 22 apr kl 07:00"
/// );
///
/// assert!(storhelg_period("Pingstdagen", 2025).is_none());
/// ```
pub fn storhelg_period(holiday_name: &str, year: i32) -> Option<StorhelgPeriod> {
    let name = holiday_name.to_lowercase();

    if name.contains("nationaldagen") {
        return Some(national_day_window(year));
    }
    if EASTER_NAMES.iter().any(|n| name.contains(n)) {
        return Some(easter_window(year));
    }
    if name.contains("midsommar") {
        return Some(midsummer_window(year));
    }
    if CHRISTMAS_NAMES.iter().any(|n| name.contains(n)) {
        return Some(christmas_window(year));
    }
    if NEW_YEAR_NAMES.iter().any(|n| name.contains(n)) {
        return Some(new_year_window(year));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ==========================================================================
    // SP-001: Easter 2025 window spans Maundy Thursday evening to the
    //         Tuesday morning after Easter Monday
    // ==========================================================================
    #[test]
    fn test_sp_001_easter_2025_window() {
        let period = easter_window(2025);
        assert_eq!(period.start, at(date(2025, 4, 17), 19));
        assert_eq!(period.end, at(date(2025, 4, 22), 7));
        assert_eq!(period.description, "Påskhelgen: 17 apr kl 19:00 → 22 apr kl 07:00");
    }

    // ==========================================================================
    // SP-002: Midsummer 2025 window
    // ==========================================================================
    #[test]
    fn test_sp_002_midsummer_2025_window() {
        assert_eq!(midsummer_eve(2025), date(2025, 6, 20));

        let period = midsummer_window(2025);
        assert_eq!(period.start, at(date(2025, 6, 19), 19));
        assert_eq!(period.end, at(date(2025, 6, 23), 7));
        assert_eq!(period.description, "Midsommar: 19 jun kl 19:00 → 23 jun kl 07:00");
    }

    // ==========================================================================
    // SP-003: Christmas window end skips a weekend after Boxing Day
    // ==========================================================================
    #[test]
    fn test_sp_003_christmas_window_skips_weekend() {
        // 2025: Dec 27 is a Saturday, so the window runs to Monday Dec 29.
        let period = christmas_window(2025);
        assert_eq!(period.start, at(date(2025, 12, 23), 19));
        assert_eq!(period.end, at(date(2025, 12, 29), 7));
        assert_eq!(period.description, "Julhelgen: 23 dec kl 19:00 → 29 dec kl 07:00");

        // 2024: Dec 27 is a Friday and needs no adjustment.
        let period = christmas_window(2024);
        assert_eq!(period.end, at(date(2024, 12, 27), 7));
    }

    // ==========================================================================
    // SP-004: New Year window crosses the year boundary and skips weekends
    // ==========================================================================
    #[test]
    fn test_sp_004_new_year_window_crosses_year() {
        // 2024 -> 2025: Jan 2, 2025 is a Thursday.
        let period = new_year_window(2024);
        assert_eq!(period.start, at(date(2024, 12, 30), 19));
        assert_eq!(period.end, at(date(2025, 1, 2), 7));
        assert_eq!(period.description, "Nyårshelgen: 30 dec kl 19:00 → 2 jan kl 07:00");

        // 2021 -> 2022: Jan 2, 2022 is a Sunday, so the window runs to Monday Jan 3.
        let period = new_year_window(2021);
        assert_eq!(period.end, at(date(2022, 1, 3), 7));
    }

    // ==========================================================================
    // SP-005: National Day is a single day with its own description
    // ==========================================================================
    #[test]
    fn test_sp_005_national_day_window() {
        let period = national_day_window(2025);
        assert_eq!(period.start, at(date(2025, 6, 6), 0));
        assert_eq!(period.end, at(date(2025, 6, 7), 0));
        assert_eq!(period.description, "Nationaldagen: 6 juni kl 00:00 → 24:00");
    }

    // ==========================================================================
    // SP-006: name dispatch covers Swedish and Norwegian variants
    // ==========================================================================
    #[test]
    fn test_sp_006_name_dispatch() {
        let cases = [
            ("Långfredagen", "Påskhelgen"),
            ("Langfredag", "Påskhelgen"),
            ("Påskafton", "Påskhelgen"),
            ("Annandag påsk", "Påskhelgen"),
            ("Andre påskedag", "Påskhelgen"),
            ("Nationaldagen", "Nationaldagen"),
            ("Midsommarafton", "Midsommar"),
            ("Midsommardagen", "Midsommar"),
            ("Julafton", "Julhelgen"),
            ("Første juledag", "Julhelgen"),
            ("Annandag jul", "Julhelgen"),
            ("Nyårsafton", "Nyårshelgen"),
            ("Nyårsdagen", "Nyårshelgen"),
            ("Nyttårsdag", "Nyårshelgen"),
        ];
        for (name, label) in cases {
            let period = storhelg_period(name, 2025)
                .unwrap_or_else(|| panic!("{name} should resolve to a period"));
            assert_eq!(period.label, label, "wrong group for {name}");
        }
    }

    // ==========================================================================
    // SP-007: merged display names and arbitrary casing still dispatch
    // ==========================================================================
    #[test]
    fn test_sp_007_merged_names_and_casing() {
        let period = storhelg_period("Juldagen / Første juledag", 2025).unwrap();
        assert_eq!(period.label, "Julhelgen");

        let period = storhelg_period("JULAFTON", 2025).unwrap();
        assert_eq!(period.label, "Julhelgen");
    }

    // ==========================================================================
    // SP-008: non-storhelg names resolve to nothing
    // ==========================================================================
    #[test]
    fn test_sp_008_non_storhelg_names() {
        for name in ["Pingstdagen", "Trettondedag jul", "Kristi himmelsfärdsdag", "Alla helgons dag", ""] {
            assert!(storhelg_period(name, 2025).is_none(), "{name} should not resolve");
        }
    }
}
