//! Arbitrary-precision integer values

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use crate::error::ValueError;

/// A signed integer of unbounded size.
///
/// Arithmetic never overflows. Callers that need a machine integer must
/// check [`Integer::is_i64`] first; [`Integer::to_i64`] refuses values
/// outside the 64-bit range instead of truncating them.
///
/// ```
/// use ttcn3_eval::Integer;
///
/// let big = Integer::from(i64::MAX) + Integer::from(1);
/// assert!(!big.is_i64());
/// assert!(big.to_i64().is_err());
///
/// let small = big - Integer::from(2);
/// assert_eq!(small.to_i64().unwrap(), i64::MAX - 1);
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer(BigInt);

impl Integer {
    /// Whether the value fits into a signed 64-bit integer.
    pub fn is_i64(&self) -> bool {
        self.0.to_i64().is_some()
    }

    /// The 64-bit representation of this integer.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::IntegerOutOfRange`] when [`Integer::is_i64`]
    /// does not hold.
    pub fn to_i64(&self) -> Result<i64, ValueError> {
        self.0
            .to_i64()
            .ok_or_else(|| ValueError::IntegerOutOfRange {
                value: self.0.to_string(),
            })
    }

    /// Borrow the underlying big integer.
    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    /// Consume the wrapper, yielding the underlying big integer.
    pub fn into_bigint(self) -> BigInt {
        self.0
    }

    /// Whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<BigInt> for Integer {
    fn from(value: BigInt) -> Self {
        Integer(value)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Integer(BigInt::from(value))
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Integer(BigInt::from(value))
    }
}

impl Add for Integer {
    type Output = Integer;

    fn add(self, rhs: Integer) -> Integer {
        Integer(self.0 + rhs.0)
    }
}

impl Sub for Integer {
    type Output = Integer;

    fn sub(self, rhs: Integer) -> Integer {
        Integer(self.0 - rhs.0)
    }
}

impl Mul for Integer {
    type Output = Integer;

    fn mul(self, rhs: Integer) -> Integer {
        Integer(self.0 * rhs.0)
    }
}

impl Neg for Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        Integer(-self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
