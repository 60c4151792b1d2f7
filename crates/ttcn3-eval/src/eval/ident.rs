//! Identifier lookup

use crate::error::EnvironmentError;
use crate::{Environment, ErrorValue};

use super::{ControlFlow, EvalResult};

/// Resolve `name` through the scope chain.
///
/// A binding that holds an error value re-raises it as a signal.
pub fn eval_ident(name: &str, env: &Environment) -> EvalResult {
    match env.lookup(name) {
        Ok(value) => ControlFlow::check(value.clone()),
        Err(EnvironmentError::NotFound { name }) => {
            Err(ErrorValue::identifier_not_found(&name).into())
        }
    }
}
