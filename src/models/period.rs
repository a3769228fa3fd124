//! Storhelg period and boundary-day models.
//!
//! This module contains the [`StorhelgPeriod`] type describing a major-holiday
//! premium window and the [`PartialBoundaryMark`] type describing a day
//! adjacent to such a window that carries a partial premium.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ObClass;

/// A major-holiday (storhelg) premium-pay window.
///
/// Windows are half-open intervals `[start, end)`. They are computed on
/// demand for each query and never persisted.
///
/// # Example
///
/// ```
/// use ob_engine::calculation::storhelg_period;
///
/// let period = storhelg_period("Julafton", 2025).unwrap();
/// assert_eq!(period.label, "Julhelgen");
/// assert!(period.start < period.end);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorhelgPeriod {
    /// The name of the holiday group, e.g. `"Påskhelgen"` or `"Julhelgen"`.
    pub label: String,
    /// The first instant inside the window.
    pub start: NaiveDateTime,
    /// The first instant after the window.
    pub end: NaiveDateTime,
    /// Human-readable description of the window, e.g.
    /// `"Julhelgen: 23 dec kl 19:00 → 29 dec kl 07:00"`.
    pub description: String,
}

impl StorhelgPeriod {
    /// Returns true if the given instant falls inside the half-open window.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Which side of a storhelg window a boundary day sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundarySide {
    /// The day immediately before the window start; the premium applies
    /// from the evening onwards.
    Before,
    /// The day the window runs into; the premium applies until the morning.
    After,
}

/// Marks a day adjacent to (but outside) a storhelg window that still
/// carries a partial premium.
///
/// Days before Epiphany, May Day and Ascension carry a kvalificerad partial
/// premium ([`PartialBoundaryMark::category`] is `Some(Kvalificerad)`); the
/// boundary days of the storhelg groups themselves carry no explicit
/// category and the caller infers storhelg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialBoundaryMark {
    /// Whether the day precedes or follows the window.
    pub side: BoundarySide,
    /// The name of the period the day borders, e.g. `"Påskhelgen"`.
    pub period: String,
    /// The time-of-day the partial premium covers, e.g. `"från kl 19:00"`.
    pub time_text: String,
    /// The OB class of the partial premium, when it is not storhelg.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ObClass>,
}
