//! The canonical date-key model.
//!
//! Every holiday table in the engine is keyed by a [`DateKey`]: a calendar day
//! encoded as `"{year}-{month}-{day}"` with a zero-based month and no zero
//! padding. The encoding is the sole serialization contract other components
//! rely on for map lookups, so it lives here as a single shared utility rather
//! than being reimplemented ad hoc per call site.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EngineError;

/// A calendar day identified by year, zero-based month and day of month.
///
/// Equality and hashing are structural. No calendar validity is enforced
/// beyond what date-overflow arithmetic naturally resolves: a month of 12
/// rolls into January of the next year and a day past the end of the month
/// rolls into the next month (see [`DateKey::to_date`]).
///
/// # Example
///
/// ```
/// use ob_engine::models::DateKey;
///
/// let key = DateKey::new(2025, 11, 24); // Dec 24, zero-based month
/// assert_eq!(key.to_string(), "2025-11-24");
/// assert_eq!("2025-11-24".parse::<DateKey>().unwrap(), key);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey {
    /// The calendar year.
    pub year: i32,
    /// The month, zero-based (0 = January, 11 = December).
    pub month: u32,
    /// The day of the month, 1-based.
    pub day: u32,
}

impl DateKey {
    /// Creates a new date key from year, zero-based month and day.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Creates a date key for the given calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
            day: date.day(),
        }
    }

    /// Resolves this key to a calendar date, letting out-of-range components
    /// roll over Gregorian month and year boundaries.
    ///
    /// A month of 12 resolves to January of the following year, and a day
    /// past the end of its month rolls into the next month. Callers must not
    /// rely on rejection of malformed keys.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use ob_engine::models::DateKey;
    ///
    /// // Day 32 of January rolls into February.
    /// let rolled = DateKey::new(2025, 0, 32).to_date();
    /// assert_eq!(rolled, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
    /// ```
    pub fn to_date(self) -> NaiveDate {
        let year = self.year + (self.month / 12) as i32;
        let month = self.month % 12;
        let first = NaiveDate::from_ymd_opt(year, month + 1, 1)
            .expect("first of month is a valid date");
        first + Duration::days(i64::from(self.day) - 1)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

impl FromStr for DateKey {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidDateKey { key: s.to_string() };

        let mut parts = s.splitn(3, '-');
        let year = parts
            .next()
            .and_then(|p| p.parse::<i32>().ok())
            .ok_or_else(invalid)?;
        let month = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(invalid)?;
        let day = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(invalid)?;

        Ok(Self { year, month, day })
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
