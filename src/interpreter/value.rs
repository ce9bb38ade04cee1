/// The typed scalar every operand and result is made of.
///
/// Defines `Scalar` with its integer, real, boolean and null variants,
/// conversions between them and the promotion rule used by mixed arithmetic.
pub mod scalar;
/// Label-keyed storage for one evaluation.
///
/// Defines `Label` and `ValueTable`, the arena that literals, variables and
/// intermediate results live in while an expression is evaluated.
pub mod table;
