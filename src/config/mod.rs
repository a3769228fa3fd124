//! Configuration loading and management for the OB Interpretation Engine.
//!
//! This module provides functionality to load calendar settings from a YAML
//! file: metadata about the collective agreement and the two holiday
//! visibility toggles that parameterize the merged holiday view.
//!
//! # Example
//!
//! ```no_run
//! use ob_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/spartrafik").unwrap();
//! println!("Loaded agreement: {}", config.agreement().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AgreementMetadata, CalendarConfig, HolidayVisibility};
