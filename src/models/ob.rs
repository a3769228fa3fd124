//! OB pay classification models.
//!
//! This module contains the OB tier enumeration, the rate triple and the
//! fully resolved per-day classification returned by the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The OB class a day resolves to.
///
/// Per § 10 Mom 1 the supplement is tiered into enkel, kvalificerad and
/// storhelg OB; `helgdag` marks a lesser named holiday on a weekday whose
/// supplement follows the ordinary weekday time bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObClass {
    /// Major-holiday OB, the highest tier.
    Storhelg,
    /// Qualified OB: weekends and lesser named holidays.
    Kvalificerad,
    /// A named holiday on an ordinary weekday.
    Helgdag,
    /// Simple OB: ordinary weekday evening hours.
    Enkel,
}

impl std::fmt::Display for ObClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObClass::Storhelg => write!(f, "storhelg"),
            ObClass::Kvalificerad => write!(f, "kvalificerad"),
            ObClass::Helgdag => write!(f, "helgdag"),
            ObClass::Enkel => write!(f, "enkel"),
        }
    }
}

/// The three OB supplements in kr/h applicable on a given date.
///
/// Selected by [`crate::calculation::ob_rates`] from the agreement's
/// rate-change cutoff; there is no interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObRates {
    /// Enkel OB, kr/h.
    pub enkel: Decimal,
    /// Kvalificerad OB, kr/h.
    pub kvalificerad: Decimal,
    /// Storhelg OB, kr/h.
    pub storhelg: Decimal,
}

/// Formats a kr/h rate with the Swedish decimal comma, e.g. `"54,69"`.
///
/// All user-facing rate strings go through this helper so that descriptions
/// and API payloads cannot drift apart in formatting.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use ob_engine::models::format_rate;
///
/// assert_eq!(format_rate(Decimal::new(2382, 2)), "23,82");
/// ```
pub fn format_rate(rate: Decimal) -> String {
    rate.to_string().replace('.', ",")
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// The resolved OB classification for one calendar day.
///
/// Always populated; resolution has no error outcome. The `description`
/// is display-ready Swedish text with newline separators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObCategory {
    /// The resolved OB class.
    pub category: ObClass,
    /// Short display label, e.g. `"Storhelg OB"` or `"Vardag"`.
    pub label: String,
    /// Display icon for calendar cells.
    pub icon: String,
    /// The applicable supplement in kr/h.
    pub rate: Decimal,
    /// True when only part of the day carries the premium (boundary days).
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_partial: bool,
    /// Display-ready description of the classification.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ob_class_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ObClass::Storhelg).unwrap(), "\"storhelg\"");
        assert_eq!(
            serde_json::to_string(&ObClass::Kvalificerad).unwrap(),
            "\"kvalificerad\""
        );
        assert_eq!(serde_json::to_string(&ObClass::Helgdag).unwrap(), "\"helgdag\"");
        assert_eq!(serde_json::to_string(&ObClass::Enkel).unwrap(), "\"enkel\"");
    }

    #[test]
    fn test_ob_class_display_matches_wire_format() {
        for class in [
            ObClass::Storhelg,
            ObClass::Kvalificerad,
            ObClass::Helgdag,
            ObClass::Enkel,
        ] {
            let wire = serde_json::to_string(&class).unwrap();
            assert_eq!(wire, format!("\"{class}\""));
        }
    }

    #[test]
    fn test_format_rate_uses_decimal_comma() {
        assert_eq!(format_rate(Decimal::new(2382, 2)), "23,82");
        assert_eq!(format_rate(Decimal::new(11953, 2)), "119,53");
    }

    #[test]
    fn test_is_partial_omitted_when_false() {
        let category = ObCategory {
            category: ObClass::Enkel,
            label: "Vardag".to_string(),
            icon: "📆".to_string(),
            rate: Decimal::new(2449, 2),
            is_partial: false,
            description: "Vanlig vardag".to_string(),
        };
        let json = serde_json::to_string(&category).unwrap();
        assert!(!json.contains("is_partial"));

        let category = ObCategory {
            is_partial: true,
            ..category
        };
        let json = serde_json::to_string(&category).unwrap();
        assert!(json.contains("\"is_partial\":true"));
    }
}
