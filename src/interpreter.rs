/// Character classification and lexeme extraction.
///
/// Decides which characters are operator characters and where a number,
/// identifier or operator run that starts at a given index ends. The
/// extractors never fail; whatever they return is validated by the caller.
pub mod scan;
/// The lexers for raw input and for the text form of canonical postfix.
///
/// Raw input is tokenized with `logos`; each token is extended by the
/// matching extractor from `scan`. Lexical errors are reported with the
/// offending slice and its byte offset.
pub mod lexer;
/// Raw input to canonical infix.
///
/// Replaces operands with labels in a fresh value table, tells negation
/// apart from subtraction, and makes implicit multiplication explicit.
pub mod normalizer;
/// Canonical infix to canonical postfix.
///
/// A shunting-yard pass driven by the precedence table in `canonical`.
pub mod shunter;
/// Canonical postfix to a value.
///
/// The label stack machine and every operation on typed scalars.
pub mod evaluator;
/// The runtime data the pipeline works on.
///
/// Typed scalars and the label-keyed table that holds them.
pub mod value;
