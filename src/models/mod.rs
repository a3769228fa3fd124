//! Core data models for the OB Interpretation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod date_key;
mod ob;
mod period;

pub use date_key::DateKey;
pub use ob::{ObCategory, ObClass, ObRates, format_rate};
pub use period::{BoundarySide, PartialBoundaryMark, StorhelgPeriod};
