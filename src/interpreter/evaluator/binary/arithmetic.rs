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
};

impl Evaluator<'_> {
    /// Evaluates `+`, `-`, `*`, `/` or `%`.
    ///
    /// Two integers stay integers, except that a division which does not come
    /// out even produces a real. Any real operand promotes the other one to a
    /// real. Real `%` is the floating-point remainder.
    ///
    /// # Errors
    /// - `DivisionByZero` for `/` or `%` with a zero right operand.
    /// - `Overflow` when an integer result does not fit.
    /// - `TypeError` for non-numeric operands.
    ///
    /// # Example
    /// ```
    /// use shunt::{
    ///     canonical::Operator,
    ///     interpreter::{evaluator::core::Evaluator, value::scalar::Scalar},
    /// };
    ///
    /// let seven = Scalar::Integer(7);
    /// let two = Scalar::Integer(2);
    ///
    /// assert_eq!(Evaluator::eval_arithmetic(Operator::Div, seven, two, 0).unwrap(),
    ///            Scalar::Real(3.5));
    /// assert_eq!(Evaluator::eval_arithmetic(Operator::Mod, seven, two, 0).unwrap(),
    ///            Scalar::Integer(1));
    /// ```
    pub fn eval_arithmetic(op: Operator,
                           left: Scalar,
                           right: Scalar,
                           position: usize)
                           -> EvalResult<Scalar> {
        use Scalar::{Integer, Real};

        match (left, right) {
            (Integer(a), Integer(b)) => Self::eval_integer_arithmetic(op, a, b, position),
            (Real(_), Integer(_) | Real(_)) | (Integer(_), Real(_)) => {
                let (left, right) = left.promote_to_real(right, position)?;
                Self::eval_real_arithmetic(op,
                                           left.as_real(position)?,
                                           right.as_real(position)?,
                                           position)
            },
            _ => Err(mismatch(op, left, right, position)),
        }
    }

    fn eval_integer_arithmetic(op: Operator, a: i64, b: i64, position: usize) -> EvalResult<Scalar> {
        use Operator::{Add, Div, Mod, Mul, Sub};

        let overflow = EvalError::Overflow { position };

        match op {
            Add => a.checked_add(b).map(Scalar::Integer).ok_or(overflow),
            Sub => a.checked_sub(b).map(Scalar::Integer).ok_or(overflow),
            Mul => a.checked_mul(b).map(Scalar::Integer).ok_or(overflow),
            Div | Mod if b == 0 => Err(EvalError::DivisionByZero { position }),
            Div => match a.checked_rem(b) {
                Some(0) => a.checked_div(b).map(Scalar::Integer).ok_or(overflow),
                Some(_) => {
                    let a = Scalar::Integer(a).as_real(position)?;
                    let b = Scalar::Integer(b).as_real(position)?;
                    Ok(Scalar::Real(a / b))
                },
                None => Err(overflow),
            },
            Mod => a.checked_rem(b).map(Scalar::Integer).ok_or(overflow),
            _ => unreachable!("eval_integer_arithmetic used with non arithmetic operator"),
        }
    }

    fn eval_real_arithmetic(op: Operator, a: f64, b: f64, position: usize) -> EvalResult<Scalar> {
        use Operator::{Add, Div, Mod, Mul, Sub};

        Ok(Scalar::Real(match op {
                            Add => a + b,
                            Sub => a - b,
                            Mul => a * b,
                            Div | Mod if b == 0.0 => {
                                return Err(EvalError::DivisionByZero { position });
                            },
                            Div => a / b,
                            Mod => a % b,
                            _ => unreachable!("eval_real_arithmetic used with non arithmetic operator"),
                        }))
    }
}
