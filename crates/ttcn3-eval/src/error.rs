//! Host-level error types
//!
//! Runtime failures of evaluated code are not Rust errors: they are
//! [`ErrorValue`](crate::value::ErrorValue)s flowing through the evaluator.
//! The types here cover misuse of the API surface itself.

use thiserror::Error;

/// Errors raised by value accessors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The integer does not fit into an `i64`.
    #[error("integer {value} is out of 64-bit range")]
    IntegerOutOfRange {
        /// Decimal rendering of the offending integer
        value: String,
    },

    /// The value is not of the requested variant.
    #[error("expected {expected}, got {got}")]
    WrongType {
        /// Requested type name
        expected: &'static str,
        /// Actual type name
        got: &'static str,
    },
}

/// Errors raised by environment operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    /// No binding with this name exists anywhere in the scope chain.
    #[error("identifier not found: {name}")]
    NotFound {
        /// The identifier that was looked up
        name: String,
    },
}
