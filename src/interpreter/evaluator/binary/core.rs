use crate::{
    canonical::Operator,
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::scalar::Scalar,
    },
};

impl Evaluator<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// Routes the operator to its family: arithmetic, bitwise, logical or
    /// comparison. Assignment is not a computation and is handled by the
    /// machine itself.
    ///
    /// # Errors
    /// Whatever the family handler reports, or `TypeError` for `=` and the
    /// prefix operators.
    ///
    /// # Example
    /// ```
    /// use shunt::{
    ///     canonical::Operator,
    ///     interpreter::{evaluator::core::Evaluator, value::scalar::Scalar},
    /// };
    ///
    /// let result =
    ///     Evaluator::eval_binary(Operator::Add, Scalar::Integer(3), Scalar::Real(0.5), 0);
    /// assert_eq!(result.unwrap(), Scalar::Real(3.5));
    /// ```
    pub fn eval_binary(op: Operator,
                       left: Scalar,
                       right: Scalar,
                       position: usize)
                       -> EvalResult<Scalar> {
        use Operator::{
            Add, And, Assign, BitAnd, BitNot, BitOr, BitXor, Div, Equal, Greater, GreaterEqual,
            Less, LessEqual, Mod, Mul, Not, NotEqual, Or, ShiftLeft, ShiftRight, Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod => Self::eval_arithmetic(op, left, right, position),
            BitAnd | BitOr | BitXor | ShiftLeft | ShiftRight => {
                Self::eval_bitwise(op, left, right, position)
            },
            And | Or => Self::eval_logic(op, left, right, position),
            Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => {
                Self::eval_comparison(op, left, right, position)
            },
            Assign | BitNot | Not => {
                Err(EvalError::TypeError { details: format!("'{op}' is not a binary operation"),
                                           position })
            },
        }
    }
}

/// Builds the error for an operator applied to operands outside its domain.
pub(in crate::interpreter::evaluator) fn mismatch(op: Operator,
                                                  left: Scalar,
                                                  right: Scalar,
                                                  position: usize)
                                                  -> EvalError {
    EvalError::TypeError { details: format!("cannot apply '{op}' to {} and {}",
                                            left.type_name(),
                                            right.type_name()),
                           position }
}
