//! Error types for the Assembly Cost Engine.
//!
//! The daily cost calculation itself is total and never fails. Errors only
//! arise at the boundaries: loading configuration, validating estimate
//! requests, looking up holiday regions and exporting reports.

use thiserror::Error;

/// The main error type for the Assembly Cost Engine.
///
/// # Example
///
/// ```
/// use assembly_cost_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
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

    /// A request field was outside its permitted range.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The offending field, e.g. `days[2].mechanics`.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The holiday region code is not known to the holiday calendar.
    #[error("Unknown holiday region: {code}")]
    UnknownRegion {
        /// The region code that was not recognised.
        code: String,
    },

    /// Writing a report failed.
    #[error("Export error: {message}")]
    ExportError {
        /// A description of the export failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
