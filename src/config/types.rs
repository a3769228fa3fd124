//! Configuration types for the OB Interpretation Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML settings file.

use serde::{Deserialize, Serialize};

/// Metadata about the collective agreement the engine interprets.
#[derive(Debug, Clone, Deserialize)]
pub struct AgreementMetadata {
    /// The human-readable name of the agreement.
    pub name: String,
    /// The section the OB rules come from (e.g., "§ 10 Mom 1").
    pub section: String,
    /// The version or effective date of the agreement.
    pub version: String,
}

/// Which holiday systems are visible in the merged holiday view.
///
/// These settings are owned by the surrounding application and passed into
/// every holiday query; the engine never caches results across changes to
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayVisibility {
    /// Show the Swedish holiday system.
    #[serde(default = "default_true")]
    pub show_swedish_holidays: bool,
    /// Show the Norwegian holiday system.
    #[serde(default)]
    pub show_norwegian_holidays: bool,
}

fn default_true() -> bool {
    true
}

impl Default for HolidayVisibility {
    fn default() -> Self {
        Self {
            show_swedish_holidays: true,
            show_norwegian_holidays: false,
        }
    }
}

/// The complete calendar configuration loaded from the settings file.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// Agreement metadata.
    pub agreement: AgreementMetadata,
    /// Holiday visibility settings.
    #[serde(default)]
    pub holidays: HolidayVisibility,
}
