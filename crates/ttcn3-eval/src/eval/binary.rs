//! Binary operation evaluation
//!
//! Both operands are always evaluated, left first. Legality is decided
//! here, not on `Value`:
//! - `==`/`!=` need operands of the same family, otherwise it is a type
//!   mismatch
//! - arithmetic and ordering are defined on integers only
//! - everything else is an unknown operator

use crate::syntax::{BinaryOp, Expr};
use crate::{Environment, ErrorValue, EvalContext, Integer, Value};

use super::{EvalResult, Evaluate};

/// Evaluate both operands, then apply the infix operator.
pub fn eval_binary(
    op: BinaryOp,
    left: &Expr,
    right: &Expr,
    env: &mut Environment,
    ctx: &EvalContext,
) -> EvalResult {
    let left = left.eval(env, ctx)?;
    let right = right.eval(env, ctx)?;
    Ok(apply_binary(op, left, right)?)
}

/// Apply an infix operator to two already evaluated operands.
///
/// # Errors
///
/// Returns a type-mismatch error for equality across families and an
/// unknown-operator error for any other illegal combination.
pub fn apply_binary(op: BinaryOp, left: Value, right: Value) -> Result<Value, ErrorValue> {
    match (op, left, right) {
        (BinaryOp::Eq | BinaryOp::Ne, left, right) => eval_equality(op, &left, &right),
        (op, Value::Integer(a), Value::Integer(b)) => eval_integer(op, a, b),
        (op, left, right) => Err(ErrorValue::unknown_infix_operator(
            &left,
            op.symbol(),
            &right,
        )),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Equality
// ═══════════════════════════════════════════════════════════════════════

fn eval_equality(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, ErrorValue> {
    if !left.same_type(right) {
        return Err(ErrorValue::type_mismatch(left, op.symbol(), right));
    }

    let equal = match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => a == b,
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        _ => {
            return Err(ErrorValue::unknown_infix_operator(
                left,
                op.symbol(),
                right,
            ))
        }
    };

    Ok(Value::Boolean(if op == BinaryOp::Ne { !equal } else { equal }))
}

// ═══════════════════════════════════════════════════════════════════════
// Integer Arithmetic and Ordering
// ═══════════════════════════════════════════════════════════════════════

fn eval_integer(op: BinaryOp, a: Integer, b: Integer) -> Result<Value, ErrorValue> {
    let value = match op {
        BinaryOp::Add => Value::Integer(a + b),
        BinaryOp::Sub => Value::Integer(a - b),
        BinaryOp::Mul => Value::Integer(a * b),
        BinaryOp::Lt => Value::Boolean(a < b),
        BinaryOp::Le => Value::Boolean(a <= b),
        BinaryOp::Gt => Value::Boolean(a > b),
        BinaryOp::Ge => Value::Boolean(a >= b),
        _ => {
            return Err(ErrorValue::unknown_infix_operator(
                &Value::Integer(a),
                op.symbol(),
                &Value::Integer(b),
            ))
        }
    };
    Ok(value)
}
