//! # ttcn3-eval
//!
//! A tree-walking evaluator for the expression and statement core of
//! TTCN-3.
//!
//! ## Architecture
//!
//! - **Frontend**: lex and parse source text into a syntax tree
//! - **Evaluator**: walk the tree and compute a [`Value`]
//! - **Environment**: lexically scoped identifier bindings
//! - **Span**: byte offset to line/column mapping for diagnostics
//!
//! Runtime failures are values, not Rust errors: evaluating `true + true`
//! yields a [`Value::Error`] whose message is part of the public contract.
//!
//! ```
//! use ttcn3_eval::{eval_source, Value};
//!
//! assert_eq!(eval_source("1+2*3").unwrap(), Value::integer(7));
//!
//! let err = eval_source("true == 1").unwrap();
//! assert_eq!(
//!     err.as_error().map(|e| e.message()),
//!     Some("type mismatch: boolean == integer")
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod environment;
pub mod error;
pub mod eval;
pub mod frontend;
pub mod span;
mod stack;
pub mod syntax;
pub mod value;

// Re-export main types
pub use context::EvalContext;
pub use environment::{Environment, Scope};
pub use error::{EnvironmentError, ValueError};
pub use eval::{eval, eval_block, eval_expr, eval_program, ControlFlow, EvalResult, Evaluate};
pub use frontend::{eval_source, LanguageFrontend, ParseError, SourceLocation, Ttcn3Frontend};
pub use value::{ErrorValue, Integer, Value};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
