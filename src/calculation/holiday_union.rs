//! The merged holiday view over the Swedish and Norwegian systems.
//!
//! Which systems are visible is controlled by two settings owned by the
//! surrounding application. They are passed in explicitly on every query so
//! the functions here stay referentially transparent; nothing is cached
//! across settings changes.

use std::collections::hash_map::Entry;

use crate::config::HolidayVisibility;
use crate::models::DateKey;

use super::holiday_table::{HolidayTable, norwegian_holidays, swedish_holidays};

/// Builds the merged holiday table for a year under the given visibility
/// settings.
///
/// The Swedish table seeds the result when enabled. Norwegian entries are
/// then folded in: a date already holding a name gets the Norwegian name
/// appended with `" / "` unless it is already contained in the existing
/// name; otherwise the Norwegian name is set directly. The merge is
/// deliberately asymmetric so the Swedish name keeps first position on
/// dates both systems observe.
///
/// # Example
///
/// ```
/// use ob_engine::calculation::holidays_for_year;
/// use ob_engine::config::HolidayVisibility;
/// use ob_engine::models::DateKey;
///
/// let both = HolidayVisibility {
///     show_swedish_holidays: true,
///     show_norwegian_holidays: true,
/// };
/// let holidays = holidays_for_year(2025, &both);
/// assert_eq!(
///     holidays.get(&DateKey::new(2025, 0, 1)).unwrap(),
///     "Nyårsdagen / Nyttårsdag"
/// );
/// ```
pub fn holidays_for_year(year: i32, settings: &HolidayVisibility) -> HolidayTable {
    let mut holidays = HolidayTable::new();

    if settings.show_swedish_holidays {
        holidays.extend(swedish_holidays(year));
    }

    if settings.show_norwegian_holidays {
        for (key, name) in norwegian_holidays(year) {
            match holidays.entry(key) {
                Entry::Occupied(mut slot) => {
                    let existing = slot.get_mut();
                    if !existing.contains(&name) {
                        existing.push_str(" / ");
                        existing.push_str(&name);
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(name);
                }
            }
        }
    }

    holidays
}

/// Returns true if the date is a Swedish holiday and Swedish holidays are
/// visible under the given settings.
pub fn is_swedish_holiday(year: i32, month: u32, day: u32, settings: &HolidayVisibility) -> bool {
    if !settings.show_swedish_holidays {
        return false;
    }
    swedish_holidays(year).contains_key(&DateKey::new(year, month, day))
}

/// Returns true if the date is a Norwegian holiday and Norwegian holidays
/// are visible under the given settings.
pub fn is_norwegian_holiday(year: i32, month: u32, day: u32, settings: &HolidayVisibility) -> bool {
    if !settings.show_norwegian_holidays {
        return false;
    }
    norwegian_holidays(year).contains_key(&DateKey::new(year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(swedish: bool, norwegian: bool) -> HolidayVisibility {
        HolidayVisibility {
            show_swedish_holidays: swedish,
            show_norwegian_holidays: norwegian,
        }
    }

    // ==========================================================================
    // HU-001: both systems hidden yields an empty table
    // ==========================================================================
    #[test]
    fn test_hu_001_both_hidden_is_empty() {
        assert!(holidays_for_year(2025, &settings(false, false)).is_empty());
    }

    // ==========================================================================
    // HU-002: shared dates join both names with " / ", Swedish first
    // ==========================================================================
    #[test]
    fn test_hu_002_shared_dates_join_names() {
        let holidays = holidays_for_year(2025, &settings(true, true));

        assert_eq!(
            holidays.get(&DateKey::new(2025, 0, 1)).unwrap(),
            "Nyårsdagen / Nyttårsdag"
        );
        assert_eq!(
            holidays.get(&DateKey::new(2025, 4, 1)).unwrap(),
            "Första maj / Arbeidernes dag"
        );
        assert_eq!(
            holidays.get(&DateKey::new(2025, 11, 25)).unwrap(),
            "Juldagen / Første juledag"
        );
    }

    // ==========================================================================
    // HU-003: single-system dates keep their plain name
    // ==========================================================================
    #[test]
    fn test_hu_003_single_system_dates() {
        let holidays = holidays_for_year(2025, &settings(true, true));

        // Swedish only.
        assert_eq!(holidays.get(&DateKey::new(2025, 0, 6)).unwrap(), "Trettondedag jul");
        // Norwegian only.
        assert_eq!(holidays.get(&DateKey::new(2025, 4, 17)).unwrap(), "Grunnlovsdag");
    }

    // ==========================================================================
    // HU-004: norwegian-only view contains no Swedish names
    // ==========================================================================
    #[test]
    fn test_hu_004_norwegian_only_view() {
        let holidays = holidays_for_year(2025, &settings(false, true));

        assert_eq!(holidays.get(&DateKey::new(2025, 0, 1)).unwrap(), "Nyttårsdag");
        assert!(!holidays.contains_key(&DateKey::new(2025, 5, 6)));
        assert!(!holidays.contains_key(&DateKey::new(2025, 11, 24)));
    }

    // ==========================================================================
    // HU-005: point queries honor the visibility flags
    // ==========================================================================
    #[test]
    fn test_hu_005_point_queries_honor_flags() {
        let visible = settings(true, true);
        let hidden = settings(false, false);

        assert!(is_swedish_holiday(2025, 11, 24, &visible));
        assert!(!is_swedish_holiday(2025, 11, 24, &hidden));
        assert!(!is_swedish_holiday(2025, 11, 23, &visible));

        assert!(is_norwegian_holiday(2025, 4, 17, &visible));
        assert!(!is_norwegian_holiday(2025, 4, 17, &hidden));
        assert!(!is_norwegian_holiday(2025, 5, 6, &visible));
    }

    // ==========================================================================
    // HU-006: repeated queries are byte-identical (no hidden state)
    // ==========================================================================
    #[test]
    fn test_hu_006_repeated_queries_identical() {
        let both = settings(true, true);
        assert_eq!(holidays_for_year(2025, &both), holidays_for_year(2025, &both));
    }

    // ==========================================================================
    // HU-007: every produced key survives a parse/format round-trip
    // ==========================================================================
    #[test]
    fn test_hu_007_key_encoding_round_trips() {
        let holidays = holidays_for_year(2025, &settings(true, true));
        for key in holidays.keys() {
            let encoded = key.to_string();
            let reparsed: DateKey = encoded.parse().unwrap();
            assert_eq!(reparsed.to_string(), encoded);
        }
    }
}
