//! Short-circuit signals for `return` and runtime errors

use crate::value::{ErrorValue, Value};

/// Signal that aborts every enclosing statement sequence.
///
/// Evaluation functions return `Result<Value, ControlFlow>`; a signal rides
/// the `Err` side, so `?` forwards it unchanged through each enclosing
/// construct until the program entry point consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlFlow {
    /// `return`: stop the enclosing blocks and yield `value`.
    Return {
        /// Value handed back by the return statement
        value: Value,
    },

    /// A runtime failure; never caught during evaluation.
    Error(ErrorValue),
}

impl ControlFlow {
    /// Create a return signal.
    pub fn return_value(value: Value) -> Self {
        ControlFlow::Return { value }
    }

    /// Convert the signal into the value reported to the caller.
    pub fn into_value(self) -> Value {
        match self {
            ControlFlow::Return { value } => value,
            ControlFlow::Error(e) => Value::Error(e),
        }
    }

    /// Lift a value produced outside the evaluator: an error value becomes
    /// a signal, anything else passes through.
    pub fn check(value: Value) -> Result<Value, ControlFlow> {
        match value {
            Value::Error(e) => Err(ControlFlow::Error(e)),
            other => Ok(other),
        }
    }
}

impl From<ErrorValue> for ControlFlow {
    fn from(e: ErrorValue) -> Self {
        ControlFlow::Error(e)
    }
}
