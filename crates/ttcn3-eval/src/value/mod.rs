//! Value representation for runtime values

mod display;
mod error_value;
mod impls;
mod integer;

pub use error_value::ErrorValue;
pub use integer::Integer;

/// Runtime value produced by the evaluator.
///
/// The set of variants is closed. Operators are not methods on `Value`:
/// the evaluator checks operand variants and decides which combinations
/// are legal.
///
/// The return signal is not a variant here. It only exists while a block is
/// being unwound and travels as [`ControlFlow::Return`](crate::ControlFlow),
/// so a `Value` handed to a caller can never be an unconsumed return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Arbitrary-precision signed integer
    Integer(Integer),

    /// Boolean: `true` or `false`
    Boolean(bool),

    /// Runtime failure carrying a human-readable message
    Error(ErrorValue),

    /// Result of a false conditional without an `else` branch
    Absent,
}
