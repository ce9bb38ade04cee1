use std::cmp::Ordering;

use ordered_float::OrderedFloat;

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

/// Maps a comparison operator and the ordering of its operands to the
/// boolean result.
#[must_use]
pub fn ordering_op_result(op: Operator, ordering: Ordering) -> bool {
    match op {
        Operator::Equal => ordering == Ordering::Equal,
        Operator::NotEqual => ordering != Ordering::Equal,
        Operator::Less => ordering == Ordering::Less,
        Operator::Greater => ordering == Ordering::Greater,
        Operator::LessEqual => ordering != Ordering::Greater,
        Operator::GreaterEqual => ordering != Ordering::Less,
        _ => unreachable!("ordering_op_result used with non comparison operator"),
    }
}

impl Evaluator<'_> {
    /// Evaluates a comparison of the form `Scalar <Operator> Scalar`.
    ///
    /// Integers compare exactly with integers and booleans with booleans
    /// (`false < true`). Any pair involving a real is compared after
    /// promotion, using the total order of `f64` in which NaN sorts above
    /// every other value and equals itself.
    ///
    /// # Errors
    /// `TypeError` for a boolean against a number.
    ///
    /// # Example
    /// ```
    /// use shunt::{
    ///     canonical::Operator,
    ///     interpreter::{evaluator::core::Evaluator, value::scalar::Scalar},
    /// };
    ///
    /// let v = Evaluator::eval_comparison(Operator::Equal, Scalar::Integer(2), Scalar::Real(2.0), 0);
    /// assert_eq!(v.unwrap(), Scalar::Bool(true));
    ///
    /// assert!(Evaluator::eval_comparison(Operator::Less, Scalar::Bool(true), Scalar::Integer(1), 0)
    ///     .is_err());
    /// ```
    pub fn eval_comparison(op: Operator,
                           left: Scalar,
                           right: Scalar,
                           position: usize)
                           -> EvalResult<Scalar> {
        use Scalar::{Bool, Integer, Real};

        let ordering = match (left, right) {
            (Integer(a), Integer(b)) => a.cmp(&b),
            (Bool(a), Bool(b)) => a.cmp(&b),
            (Real(_), Integer(_) | Real(_)) | (Integer(_), Real(_)) => {
                let (l, r) = left.promote_to_real(right, position)?;
                OrderedFloat(l.as_real(position)?).cmp(&OrderedFloat(r.as_real(position)?))
            },
            _ => return Err(mismatch(op, left, right, position)),
        };

        Ok(Scalar::Bool(ordering_op_result(op, ordering)))
    }
}
