use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// The result of dividing one currency amount by another.
///
/// `Decimal` has no representation for division by zero, so the outcomes a
/// floating-point division would produce are spelled out: a positive or
/// negative infinity for a non-zero numerator, and `Undefined` for `0 / 0`.
/// Comparisons follow floating-point semantics: the infinities bound every
/// finite value and `Undefined` is unordered, even with itself.
#[derive(Debug, Clone, Copy)]
pub enum Ratio {
    Finite(Decimal),
    PositiveInfinity,
    NegativeInfinity,
    Undefined,
}

impl Ratio {
    /// Divides `numerator` by `denominator` without ever panicking.
    ///
    /// A quotient too large for `Decimal` saturates to the infinity of its sign.
    pub fn divide(numerator: Decimal, denominator: Decimal) -> Self {
        if denominator.is_zero() {
            return if numerator.is_zero() {
                Ratio::Undefined
            } else if numerator.is_sign_negative() {
                Ratio::NegativeInfinity
            } else {
                Ratio::PositiveInfinity
            };
        }

        match numerator.checked_div(denominator) {
            Some(quotient) => Ratio::Finite(quotient),
            None if numerator.is_sign_negative() != denominator.is_sign_negative() => {
                Ratio::NegativeInfinity
            }
            None => Ratio::PositiveInfinity,
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Ratio::Finite(_))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Ratio::Undefined)
    }

    pub fn as_finite(&self) -> Option<Decimal> {
        match self {
            Ratio::Finite(value) => Some(*value),
            _ => None,
        }
    }

    /// `self < threshold` under floating-point rules: true for negative
    /// infinity, false for positive infinity and for `Undefined`.
    pub fn is_below(&self, threshold: Decimal) -> bool {
        self.partial_cmp(&Ratio::Finite(threshold)) == Some(Ordering::Less)
    }

    fn rank(&self) -> Option<(i8, Decimal)> {
        match self {
            Ratio::NegativeInfinity => Some((-1, Decimal::ZERO)),
            Ratio::Finite(value) => Some((0, *value)),
            Ratio::PositiveInfinity => Some((1, Decimal::ZERO)),
            Ratio::Undefined => None,
        }
    }
}

impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let (lhs, rhs) = (self.rank()?, other.rank()?);
        Some(lhs.cmp(&rhs))
    }
}

impl From<Decimal> for Ratio {
    fn from(value: Decimal) -> Self {
        Ratio::Finite(value)
    }
}

/// Finite values honour the formatter's precision; the others print as
/// `inf`, `-inf` and `NaN`.
impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ratio::Finite(value) => fmt::Display::fmt(value, f),
            Ratio::PositiveInfinity => f.pad("inf"),
            Ratio::NegativeInfinity => f.pad("-inf"),
            Ratio::Undefined => f.pad("NaN"),
        }
    }
}

impl Serialize for Ratio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
