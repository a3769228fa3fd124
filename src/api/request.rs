//! Request types for the OB Interpretation Engine API.
//!
//! This module defines the JSON request structures for the `/classify`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::models::DateKey;

/// Request body for the `/classify` endpoint.
///
/// Dates use the engine's canonical key encoding: `"{year}-{month}-{day}"`
/// with a zero-based month and no zero padding, e.g. `"2025-11-24"` for
/// Christmas Eve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// The days to classify.
    pub dates: Vec<DateKey>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_parses_date_keys() {
        let request: ClassifyRequest =
            serde_json::from_str(r#"{"dates": ["2025-11-24", "2025-0-1"]}"#).unwrap();
        assert_eq!(request.dates, vec![DateKey::new(2025, 11, 24), DateKey::new(2025, 0, 1)]);
    }

    #[test]
    fn test_request_rejects_malformed_keys() {
        let result = serde_json::from_str::<ClassifyRequest>(r#"{"dates": ["not-a-key"]}"#);
        assert!(result.is_err());
    }
}
