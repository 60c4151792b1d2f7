//! Literal evaluation

use num_bigint::BigInt;

use crate::{Integer, Value};

/// Evaluate an integer literal.
pub fn eval_int(n: &BigInt) -> Value {
    Value::Integer(Integer::from(n.clone()))
}

/// Evaluate a boolean literal.
pub fn eval_bool(b: bool) -> Value {
    Value::Boolean(b)
}
