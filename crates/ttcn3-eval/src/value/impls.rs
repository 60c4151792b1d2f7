//! Value constructors, predicates, extractors and From impls

use num_bigint::BigInt;

use super::*;
use crate::error::ValueError;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create an integer value
    pub fn integer(n: impl Into<Integer>) -> Self {
        Value::Integer(n.into())
    }

    /// Create a boolean value
    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    /// Create an error value
    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(ErrorValue::new(message))
    }

    /// Create the absent marker
    pub fn absent() -> Self {
        Value::Absent
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Information
    // ═══════════════════════════════════════════════════════════════════

    /// Lowercase type name as it appears in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Boolean(_) => "boolean",
            Value::Error(_) => "error",
            Value::Absent => "absent",
        }
    }

    /// Check if value is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Whether both values belong to the same family.
    pub fn same_type(&self, other: &Value) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors
    // ═══════════════════════════════════════════════════════════════════

    /// Borrow the integer payload
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Value::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// Get the boolean payload
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow the error payload
    pub fn as_error(&self) -> Option<&ErrorValue> {
        match self {
            Value::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Extract a machine integer.
    ///
    /// # Errors
    ///
    /// Fails if the value is not an integer or is out of 64-bit range.
    pub fn to_i64(&self) -> Result<i64, ValueError> {
        match self {
            Value::Integer(n) => n.to_i64(),
            other => Err(ValueError::WrongType {
                expected: "integer",
                got: other.type_name(),
            }),
        }
    }

    /// Extract a boolean.
    ///
    /// # Errors
    ///
    /// Fails if the value is not a boolean.
    pub fn to_bool(&self) -> Result<bool, ValueError> {
        self.as_bool().ok_or(ValueError::WrongType {
            expected: "boolean",
            got: self.type_name(),
        })
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(Integer::from(n))
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::Integer(Integer::from(n))
    }
}

impl From<Integer> for Value {
    fn from(n: Integer) -> Self {
        Value::Integer(n)
    }
}

impl From<ErrorValue> for Value {
    fn from(e: ErrorValue) -> Self {
        Value::Error(e)
    }
}
