use std::fmt;

use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the evaluator.
///
/// Every operand, intermediate result and final result is one of these
/// variants. Operators pattern-match on the pair of variants they receive;
/// mixing `Integer` and `Real` promotes to `Real`, every other mixture is
/// a type error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
    /// A boolean, produced by `true`/`false` literals, comparisons and logical
    /// operators.
    Bool(bool),
    /// The value of a variable that has been mentioned but not yet assigned.
    /// Reading it is an error.
    Null,
}

impl Scalar {
    /// Name of the variant, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Bool(_) => "boolean",
            Self::Null => "null",
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Integers beyond `2^53` round to the nearest representable `f64`.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::value::scalar::Scalar;
    ///
    /// assert_eq!(Scalar::Integer(10).as_real(0).unwrap(), 10.0);
    /// assert_eq!(Scalar::Integer(9_007_199_254_740_993).as_real(0).unwrap(),
    ///            9_007_199_254_740_992.0);
    /// assert!(Scalar::Bool(true).as_real(0).is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(&self, position: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(*n as f64),
            _ => Err(self.expected("a number", position)),
        }
    }

    /// Returns the integer, or an error if the value is anything else.
    pub fn as_integer(&self, position: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            _ => Err(self.expected("an integer", position)),
        }
    }

    /// Returns the boolean, or an error if the value is anything else.
    pub fn as_bool(&self, position: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(self.expected("a boolean", position)),
        }
    }

    /// Promotes an integer to a real for mixed math, or returns the values
    /// as-is if they already match.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::value::scalar::Scalar;
    ///
    /// let (a, b) = Scalar::Integer(2).promote_to_real(Scalar::Real(0.5), 0).unwrap();
    /// assert_eq!(a, Scalar::Real(2.0));
    /// assert_eq!(b, Scalar::Real(0.5));
    /// ```
    pub fn promote_to_real(self, other: Self, position: usize) -> EvalResult<(Self, Self)> {
        use Scalar::{Integer, Real};

        match (self, other) {
            (Real(_), Integer(_)) => Ok((self, Real(other.as_real(position)?))),
            (Integer(_), Real(_)) => Ok((Real(self.as_real(position)?), other)),
            _ => Ok((self, other)),
        }
    }

    fn expected(&self, what: &str, position: usize) -> EvalError {
        EvalError::TypeError { details: format!("expected {what}, found {}", self.type_name()),
                               position }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Debug keeps the shortest round-trip digits and always shows a
            // decimal point or exponent.
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
        }
    }
}
