use crate::{
    canonical::{Lexeme, Operator},
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::scalar::Scalar,
    },
};

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Bitwise complement (`~x`).
    BitNot,
    /// Logical not (`!x`).
    Not,
}

impl UnaryOperator {
    /// The prefix operator a lexeme stands for, if any.
    #[must_use]
    pub const fn from_lexeme(lexeme: &Lexeme) -> Option<Self> {
        match lexeme {
            Lexeme::UnaryMinus => Some(Self::Negate),
            Lexeme::Op(Operator::BitNot) => Some(Self::BitNot),
            Lexeme::Op(Operator::Not) => Some(Self::Not),
            _ => None,
        }
    }
}

impl Evaluator<'_> {
    /// Evaluates a prefix operator on a value.
    ///
    /// - `Negate` works on integers and reals.
    /// - `BitNot` requires an integer.
    /// - `Not` requires a boolean.
    ///
    /// # Errors
    /// `TypeError` for any other operand, `Overflow` when negating
    /// `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::{
    ///     evaluator::{core::Evaluator, unary::UnaryOperator},
    ///     value::scalar::Scalar,
    /// };
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Negate, Scalar::Integer(5), 0).unwrap();
    /// assert_eq!(v, Scalar::Integer(-5));
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::BitNot, Scalar::Integer(0), 0).unwrap();
    /// assert_eq!(v, Scalar::Integer(-1));
    ///
    /// assert!(Evaluator::eval_unary(UnaryOperator::Not, Scalar::Integer(1), 0).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Scalar, position: usize) -> EvalResult<Scalar> {
        match op {
            UnaryOperator::Negate => match value {
                Scalar::Integer(n) => {
                    n.checked_neg().map(Scalar::Integer).ok_or(EvalError::Overflow { position })
                },
                Scalar::Real(r) => Ok(Scalar::Real(-r)),
                _ => Err(EvalError::TypeError { details: format!("cannot negate a {}",
                                                                 value.type_name()),
                                                position }),
            },
            UnaryOperator::BitNot => Ok(Scalar::Integer(!value.as_integer(position)?)),
            UnaryOperator::Not => Ok(Scalar::Bool(!value.as_bool(position)?)),
        }
    }
}
