//! Error types for the employee payroll service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while managing employee records
//! and calculating salaries.

use thiserror::Error;

use crate::models::EmployeeId;

/// The main error type for the employee payroll service.
///
/// The store, the service and the calculator all return this error type,
/// so the HTTP layer has a single place to translate failures into
/// responses.
///
/// # Example
///
/// ```
/// use employee_payroll::error::PayrollError;
///
/// let error = PayrollError::EmployeeNotFound { id: 42 };
/// assert_eq!(error.to_string(), "Employee not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or holds invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No active employee matches the given id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: EmployeeId,
    },

    /// A request carried a malformed or out-of-range field.
    #[error("Invalid field '{field}': {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The employee's type id has no salary rule.
    #[error("Employee type not found: {type_id}")]
    UnknownEmployeeType {
        /// The unmapped type id.
        type_id: i32,
    },

    /// The backing store failed.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

impl PayrollError {
    /// Shorthand for building a [`PayrollError::Validation`].
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for building a [`PayrollError::Storage`].
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
