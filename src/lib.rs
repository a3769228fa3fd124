//! OB Interpretation Engine for Swedish rail shift calendars
//!
//! This crate interprets § 10 Mom 1 of the Swedish rail collective agreement
//! (Spårtrafikavtalet): for any calendar day it resolves the public-holiday
//! name (Swedish and/or Norwegian systems), the storhelg premium-pay window,
//! partial boundary days, and the applicable OB (obekväm arbetstid) pay
//! category and hourly supplement.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
