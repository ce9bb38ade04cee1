use crate::{
    canonical::Operator,
    error::EvalError,
    interpreter::{
        evaluator::{
            binary::core::mismatch,
            core::{EvalResult, Evaluator},
        },
        value::scalar::Scalar,
    },
    util::num::shift_amount,
};

impl Evaluator<'_> {
    /// Evaluates `&`, `|`, `^`, `<<` or `>>`.
    ///
    /// Both operands must be integers. `>>` is an arithmetic shift, and a
    /// shift amount must lie in `0..64`.
    ///
    /// # Errors
    /// `TypeError` for non-integer operands, `Overflow` for a shift amount
    /// out of range.
    ///
    /// # Example
    /// ```
    /// use shunt::{
    ///     canonical::Operator,
    ///     interpreter::{evaluator::core::Evaluator, value::scalar::Scalar},
    /// };
    ///
    /// let v = Evaluator::eval_bitwise(Operator::BitXor, Scalar::Integer(6), Scalar::Integer(3), 0);
    /// assert_eq!(v.unwrap(), Scalar::Integer(5));
    ///
    /// let v = Evaluator::eval_bitwise(Operator::ShiftRight, Scalar::Integer(-8), Scalar::Integer(1), 0);
    /// assert_eq!(v.unwrap(), Scalar::Integer(-4));
    /// ```
    pub fn eval_bitwise(op: Operator,
                        left: Scalar,
                        right: Scalar,
                        position: usize)
                        -> EvalResult<Scalar> {
        use Operator::{BitAnd, BitOr, BitXor, ShiftLeft, ShiftRight};

        let (Scalar::Integer(a), Scalar::Integer(b)) = (left, right) else {
            return Err(mismatch(op, left, right, position));
        };

        match op {
            BitAnd => Ok(Scalar::Integer(a & b)),
            BitOr => Ok(Scalar::Integer(a | b)),
            BitXor => Ok(Scalar::Integer(a ^ b)),
            ShiftLeft | ShiftRight => {
                let amount = shift_amount(b).ok_or(EvalError::Overflow { position })?;
                Ok(Scalar::Integer(if op == ShiftLeft { a << amount } else { a >> amount }))
            },
            _ => unreachable!("eval_bitwise used with non bitwise operator"),
        }
    }
}
