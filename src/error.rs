//! Error types for the Teaching-Salary Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading data snapshots
//! and building salary reports.
//!
//! Configuration gaps (a year with no active rate row, or a student count
//! that falls between class-size bands) are absent here: they
//! resolve to neutral multipliers and surface as report warnings instead.

use thiserror::Error;

/// The main error type for the Teaching-Salary Engine.
///
/// # Example
///
/// ```
/// use teaching_salary_engine::error::EngineError;
///
/// let error = EngineError::InvalidScope {
///     message: "either academic_year or semester_id is required".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid report scope: either academic_year or semester_id is required"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A snapshot file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A snapshot file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A class section references a course, semester, or teacher that does
    /// not exist in the supplied records.
    #[error("Data integrity error in class section '{section_id}': {message}")]
    DataIntegrity {
        /// The id of the offending class section.
        section_id: String,
        /// A description of the missing relation.
        message: String,
    },

    /// The requested report scope is incomplete or contradictory.
    #[error("Invalid report scope: {message}")]
    InvalidScope {
        /// A description of what made the scope invalid.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidScope`].
    pub fn invalid_scope(message: impl Into<String>) -> Self {
        EngineError::InvalidScope {
            message: message.into(),
        }
    }

    /// Shorthand for building an [`EngineError::DataIntegrity`].
    pub fn data_integrity(section_id: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::DataIntegrity {
            section_id: section_id.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
