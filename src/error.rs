/// Errors raised by any stage of the pipeline.
///
/// Defines `EvalError`, with one variant per failure and the offending lexeme
/// and position where that applies, and `ErrorKind`, the coarse
/// classification hosts can match on.
pub mod eval_error;

pub use eval_error::{ErrorKind, EvalError};
