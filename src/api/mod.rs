//! HTTP API module for the OB Interpretation Engine.
//!
//! This module provides the read-only REST endpoints for querying holiday
//! tables and per-day OB classifications.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ClassifyRequest;
pub use response::{ApiError, ClassifyResponse, DayClassification, HolidaysResponse};
pub use state::AppState;
