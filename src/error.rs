//! Error types for the OB Interpretation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calendar core itself is total over its input domain and never fails;
//! errors only arise at the edges, when loading configuration or parsing
//! date keys received over the API.

use thiserror::Error;

/// The main error type for the OB Interpretation Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use ob_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/settings.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/settings.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A date key string did not match the `"{year}-{month}-{day}"` encoding.
    #[error("Invalid date key: {key}")]
    InvalidDateKey {
        /// The offending key.
        key: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
