//! # shunt
//!
//! shunt evaluates a line of infix arithmetic and logic, such as
//! `x = 2(3 + 1) << 1`, and returns an integer, real or boolean.
//! Evaluation runs in three stages: the input is normalized into canonical
//! infix with every operand replaced by a label, converted to canonical
//! postfix by a shunting-yard pass, and executed by a stack machine over a
//! per-call value table.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    canonical::{Infix, Postfix},
    interpreter::{
        evaluator::core::{EvalResult, evaluate_postfix},
        normalizer::normalize_with,
        shunter::shunt,
        value::{scalar::Scalar, table::ValueTable},
    },
};

/// The canonical streams passed between the stages.
///
/// Declares the `Lexeme` and `Operator` types, the precedence table, the
/// `Infix` and `Postfix` streams, and their text forms using the `` ` ``
/// prefix and the `#` unary minus.
///
/// # Responsibilities
/// - Defines every lexeme a canonical stream can hold.
/// - Carries the byte position of each lexeme for error reporting.
/// - Renders and decodes the text form used at the pipeline boundary.
pub mod canonical;
/// Provides the error type for every stage.
///
/// # Responsibilities
/// - Defines one error variant per failure mode.
/// - Attaches the offending lexeme and byte position.
/// - Classifies errors into kinds for hosts.
pub mod error;
/// Orchestrates the normalize, shunt and evaluate stages.
///
/// # Responsibilities
/// - Lexes raw input and normalizes it into canonical infix.
/// - Converts canonical infix to canonical postfix.
/// - Executes canonical postfix over typed scalars.
pub mod interpreter;
/// Numeric helpers shared by the evaluator.
pub mod util;

/// Everything one evaluation produced, stage by stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// The normalized input.
    pub infix:   Infix,
    /// The input in evaluation order.
    pub postfix: Postfix,
    /// Every literal, variable and intermediate result after evaluation.
    pub table:   ValueTable,
    /// The value of the expression.
    pub result:  Scalar,
}

/// Evaluates one expression.
///
/// Every call starts from an empty value table; nothing carries over between
/// calls.
///
/// # Errors
/// Returns the first error raised by normalization, shunting or evaluation.
///
/// # Examples
/// ```
/// use shunt::{evaluate, interpreter::value::scalar::Scalar};
///
/// assert_eq!(evaluate("3 + 4 * 2").unwrap(), Scalar::Integer(11));
/// assert_eq!(evaluate("7 / 2").unwrap(), Scalar::Real(3.5));
/// assert_eq!(evaluate("(a = 2) * a").unwrap(), Scalar::Integer(4));
///
/// // 'x' is never assigned.
/// assert!(evaluate("x + 1").is_err());
/// ```
pub fn evaluate(source: &str) -> EvalResult<Scalar> {
    evaluate_with(source, ValueTable::new())
}

/// Evaluates one expression against a table the caller has already seeded.
///
/// Variables bound in `table` keep their value instead of starting out as
/// `Null`.
///
/// # Errors
/// Returns the first error raised by normalization, shunting or evaluation.
///
/// # Examples
/// ```
/// use shunt::{
///     evaluate_with,
///     interpreter::value::{scalar::Scalar, table::ValueTable},
/// };
///
/// let mut table = ValueTable::new();
/// table.bind("rate", Scalar::Real(0.5));
///
/// assert_eq!(evaluate_with("rate * 4", table).unwrap(), Scalar::Real(2.0));
/// ```
pub fn evaluate_with(source: &str, table: ValueTable) -> EvalResult<Scalar> {
    trace_with(source, table).map(|trace| trace.result)
}

/// Evaluates one expression and keeps every intermediate form.
///
/// # Errors
/// Returns the first error raised by normalization, shunting or evaluation.
///
/// # Examples
/// ```
/// use shunt::{interpreter::value::scalar::Scalar, trace};
///
/// let trace = trace("-(2 + 3)").unwrap();
/// assert_eq!(trace.infix.to_string(), "#(`0+`1)");
/// assert_eq!(trace.postfix.to_string(), "`0`1`+`#");
/// assert_eq!(trace.result, Scalar::Integer(-5));
/// ```
pub fn trace(source: &str) -> EvalResult<Trace> {
    trace_with(source, ValueTable::new())
}

/// [`trace`] against a table the caller has already seeded.
///
/// # Errors
/// Returns the first error raised by normalization, shunting or evaluation.
pub fn trace_with(source: &str, table: ValueTable) -> EvalResult<Trace> {
    let (infix, mut table) = normalize_with(source, table)?;
    let postfix = shunt(&infix)?;
    let result = evaluate_postfix(&postfix, &mut table)?;
    log::debug!("{source:?} evaluated to {result}");

    Ok(Trace { infix,
               postfix,
               table,
               result })
}
