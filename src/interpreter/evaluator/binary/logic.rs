use crate::{
    canonical::Operator,
    interpreter::{
        evaluator::{
            binary::core::mismatch,
            core::{EvalResult, Evaluator},
        },
        value::scalar::Scalar,
    },
};

impl Evaluator<'_> {
    /// Evaluates `&&` or `||` between two booleans.
    ///
    /// Both operands have already been evaluated, so there is no
    /// short-circuiting.
    ///
    /// # Errors
    /// `TypeError` unless both operands are booleans.
    pub fn eval_logic(op: Operator, left: Scalar, right: Scalar, position: usize) -> EvalResult<Scalar> {
        let (Scalar::Bool(a), Scalar::Bool(b)) = (left, right) else {
            return Err(mismatch(op, left, right, position));
        };

        match op {
            Operator::And => Ok(Scalar::Bool(a && b)),
            Operator::Or => Ok(Scalar::Bool(a || b)),
            _ => unreachable!("eval_logic used with non logical operator"),
        }
    }
}
