//! Runtime error values and their message templates
//!
//! Message wording is matched verbatim by diagnostics and hovers, so every
//! template lives here and nowhere else.

use super::Value;

/// A runtime failure produced during evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorValue {
    message: String,
}

impl ErrorValue {
    /// Create an error with an arbitrary message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// `unknown operator: -true`
    ///
    /// Keyword operators such as `not` are separated from the operand by a
    /// space; symbolic ones are not.
    pub fn unknown_prefix_operator(op: &str, operand: &Value) -> Self {
        let sep = if op.chars().all(char::is_alphabetic) {
            " "
        } else {
            ""
        };
        Self::new(format!("unknown operator: {}{}{}", op, sep, operand))
    }

    /// `unknown operator: boolean + boolean`
    pub fn unknown_infix_operator(left: &Value, op: &str, right: &Value) -> Self {
        Self::new(format!(
            "unknown operator: {} {} {}",
            left.type_name(),
            op,
            right.type_name()
        ))
    }

    /// `type mismatch: boolean == integer`
    pub fn type_mismatch(left: &Value, op: &str, right: &Value) -> Self {
        Self::new(format!(
            "type mismatch: {} {} {}",
            left.type_name(),
            op,
            right.type_name()
        ))
    }

    /// `boolean expression expected. Got integer (1)`
    pub fn boolean_expected(got: &Value) -> Self {
        Self::new(format!(
            "boolean expression expected. Got {} ({})",
            got.type_name(),
            got
        ))
    }

    /// `identifier not found: x`
    pub fn identifier_not_found(name: &str) -> Self {
        Self::new(format!("identifier not found: {}", name))
    }

    /// Evaluation was stopped through the context's interrupt flag.
    pub fn interrupted() -> Self {
        Self::new("evaluation interrupted")
    }

    /// Blocks were nested deeper than the context allows.
    pub fn depth_exceeded(limit: usize) -> Self {
        Self::new(format!("maximum nesting depth exceeded: {}", limit))
    }
}
