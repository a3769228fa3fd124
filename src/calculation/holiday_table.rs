//! Swedish and Norwegian holiday table builders.
//!
//! Each builder produces, for one calendar year, the complete mapping from
//! date key to holiday name for its system. Tables are built fresh on every
//! query and never cached; building is a pure function of the year.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::DateKey;

use super::easter::compute_easter;

/// A holiday table for one year and one holiday system: date key → name.
pub type HolidayTable = HashMap<DateKey, String>;

fn insert(table: &mut HolidayTable, date: NaiveDate, name: &str) {
    table.insert(DateKey::from_date(date), name.to_string());
}

/// Builds the Swedish holiday table for a year.
///
/// Fixed-date entries are inserted directly; Easter-relative entries derive
/// from [`compute_easter`]. Midsummer Day is the first Saturday of June
/// 20–26 with Midsummer Eve the preceding Friday, and All Saints' Day is the
/// first Saturday in the Oct 31 – Nov 6 window. Both searches stop at the
/// first match.
///
/// # Example
///
/// ```
/// use ob_engine::calculation::swedish_holidays;
/// use ob_engine::models::DateKey;
///
/// let holidays = swedish_holidays(2025);
/// assert_eq!(holidays.get(&DateKey::new(2025, 11, 24)).unwrap(), "Julafton");
/// assert_eq!(holidays.get(&DateKey::new(2025, 3, 18)).unwrap(), "Långfredagen");
/// ```
pub fn swedish_holidays(year: i32) -> HolidayTable {
    let easter = compute_easter(year);
    let mut holidays = HolidayTable::new();

    holidays.insert(DateKey::new(year, 0, 1), "Nyårsdagen".to_string());
    holidays.insert(DateKey::new(year, 0, 6), "Trettondedag jul".to_string());
    holidays.insert(DateKey::new(year, 4, 1), "Första maj".to_string());
    holidays.insert(DateKey::new(year, 5, 6), "Nationaldagen".to_string());
    holidays.insert(DateKey::new(year, 11, 24), "Julafton".to_string());
    holidays.insert(DateKey::new(year, 11, 25), "Juldagen".to_string());
    holidays.insert(DateKey::new(year, 11, 26), "Annandag jul".to_string());
    holidays.insert(DateKey::new(year, 11, 31), "Nyårsafton".to_string());

    insert(&mut holidays, easter - Duration::days(2), "Långfredagen");
    insert(&mut holidays, easter - Duration::days(1), "Påskafton");
    insert(&mut holidays, easter, "Påskdagen");
    insert(&mut holidays, easter + Duration::days(1), "Annandag påsk");
    insert(&mut holidays, easter + Duration::days(39), "Kristi himmelsfärdsdag");
    insert(&mut holidays, easter + Duration::days(49), "Pingstdagen");

    // Midsummer Day: first Saturday of June 20-26.
    for day in 20..=26 {
        let date = NaiveDate::from_ymd_opt(year, 6, day).expect("June 20-26 are valid dates");
        if date.weekday() == Weekday::Sat {
            holidays.insert(DateKey::new(year, 5, day - 1), "Midsommarafton".to_string());
            holidays.insert(DateKey::new(year, 5, day), "Midsommardagen".to_string());
            break;
        }
    }

    // All Saints' Day: first Saturday from Oct 31 into early November,
    // expressed as day offsets 31-37 with offsets past 31 landing in November.
    for offset in 31..=37 {
        let (month0, day) = if offset > 31 { (10, offset - 31) } else { (9, offset) };
        let date =
            NaiveDate::from_ymd_opt(year, month0 + 1, day).expect("Oct 31 - Nov 6 are valid dates");
        if date.weekday() == Weekday::Sat {
            holidays.insert(DateKey::new(year, month0, day), "Alla helgons dag".to_string());
            break;
        }
    }

    holidays
}

/// Builds the Norwegian holiday table for a year.
///
/// # Example
///
/// ```
/// use ob_engine::calculation::norwegian_holidays;
/// use ob_engine::models::DateKey;
///
/// let holidays = norwegian_holidays(2025);
/// assert_eq!(holidays.get(&DateKey::new(2025, 4, 17)).unwrap(), "Grunnlovsdag");
/// ```
pub fn norwegian_holidays(year: i32) -> HolidayTable {
    let easter = compute_easter(year);
    let mut holidays = HolidayTable::new();

    holidays.insert(DateKey::new(year, 0, 1), "Nyttårsdag".to_string());
    holidays.insert(DateKey::new(year, 4, 1), "Arbeidernes dag".to_string());
    holidays.insert(DateKey::new(year, 4, 17), "Grunnlovsdag".to_string());
    holidays.insert(DateKey::new(year, 11, 25), "Første juledag".to_string());
    holidays.insert(DateKey::new(year, 11, 26), "Andre juledag".to_string());

    insert(&mut holidays, easter - Duration::days(3), "Skjærtorsdag");
    insert(&mut holidays, easter - Duration::days(2), "Langfredag");
    insert(&mut holidays, easter, "Første påskedag");
    insert(&mut holidays, easter + Duration::days(1), "Andre påskedag");
    insert(&mut holidays, easter + Duration::days(39), "Kristi himmelfartsdag");
    insert(&mut holidays, easter + Duration::days(49), "Første pinsedag");
    insert(&mut holidays, easter + Duration::days(50), "Andre pinsedag");

    holidays
}
