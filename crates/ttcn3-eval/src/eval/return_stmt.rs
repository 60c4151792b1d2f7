//! Return statement evaluation

use crate::eval::control::ControlFlow;
use crate::syntax::ReturnStmt;
use crate::{Environment, EvalContext, Value};

use super::{EvalResult, Evaluate};

impl Evaluate for ReturnStmt {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> EvalResult {
        let value = match &self.value {
            Some(expr) => expr.eval(env, ctx)?,
            None => Value::Absent,
        };

        // Return is implemented as a control flow signal
        Err(ControlFlow::return_value(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{BinaryOp, Expr};
    use crate::ErrorValue;

    #[test]
    fn test_return_with_value() {
        let stmt = ReturnStmt {
            value: Some(Expr::binary(BinaryOp::Mul, Expr::int(3), Expr::int(4))),
        };
        let result = stmt.eval(&mut Environment::new(), &EvalContext::default());
        assert_eq!(result, Err(ControlFlow::return_value(Value::integer(12))));
    }

    #[test]
    fn test_return_without_value() {
        let stmt = ReturnStmt { value: None };
        let result = stmt.eval(&mut Environment::new(), &EvalContext::default());
        assert_eq!(result, Err(ControlFlow::return_value(Value::Absent)));
    }

    #[test]
    fn test_return_forwards_errors_unwrapped() {
        let stmt = ReturnStmt {
            value: Some(Expr::Ident("missing".to_string())),
        };
        let result = stmt.eval(&mut Environment::new(), &EvalContext::default());
        assert_eq!(
            result,
            Err(ControlFlow::Error(ErrorValue::new(
                "identifier not found: missing"
            )))
        );
    }
}
