/// The stack machine and the result type shared by every stage.
///
/// Contains `Evaluator`, which walks canonical postfix over a value table,
/// and `evaluate_postfix`, its entry point.
pub mod core;

/// Prefix operator evaluation.
///
/// Negation, bitwise complement and logical not.
pub mod unary;

/// Binary operator evaluation.
///
/// Arithmetic, bitwise, logical and comparison operators, with the
/// integer-to-real promotion rules.
pub mod binary;
