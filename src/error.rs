//! Error types for the Teaching-Time Accounting Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only configuration and row-level parsing failures are errors; staffing
//! shortfalls and contract ineligibility are ordinary data outcomes and are
//! represented structurally elsewhere.

use thiserror::Error;

/// The main error type for the Teaching-Time Accounting Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use signup_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
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

    /// A required column is missing from the sign-up sheet header.
    #[error("Sign-up sheet is missing required column: {column}")]
    MissingColumn {
        /// The name of the missing column.
        column: String,
    },

    /// A sign-up sheet row contained an unparseable field.
    #[error("Invalid sign-up sheet row {line}: {message}")]
    InvalidRow {
        /// The 1-based line number of the offending row.
        line: u64,
        /// A description of what made the row invalid.
        message: String,
    },

    /// The sign-up sheet could not be read at all.
    #[error("Failed to read sign-up sheet: {message}")]
    SheetReadError {
        /// A description of the underlying read failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
