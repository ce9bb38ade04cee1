use thiserror::Error;

/// Classification of an [`EvalError`].
///
/// Two failures with the same kind describe the same class of problem even if
/// the offending lexeme or position differs. Hosts that only need to react to
/// the category of a failure should match on this rather than on
/// [`EvalError`] itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input held nothing to evaluate.
    EmptyInput,
    /// Unrecognized character, dangling unary `-`, malformed literal,
    /// missing operator or unbalanced parenthesis.
    Syntax,
    /// An operator lexeme that has no entry in the precedence table.
    Precedence,
    /// An operator applied outside its domain, or a read of an unbound
    /// variable.
    Type,
    /// Assignment through something other than a named variable.
    Assign,
    /// Division or modulus by zero, or integer overflow.
    Arithmetic,
    /// An operator found fewer operands than it needs.
    StackUnderflow,
    /// The operand stack did not hold exactly one value at the end.
    Residue,
}

/// Represents every error that can occur while evaluating an expression.
///
/// Positions are byte offsets into the text the failing lexeme was read
/// from: the raw input for lexing and normalization errors, or the same
/// offsets carried along by each canonical lexeme for shunting and evaluation
/// errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The input was empty or held only whitespace.
    #[error("Error: Nothing to evaluate.")]
    EmptyInput,
    /// A character outside the accepted alphabet.
    #[error("Error at position {position}: Unexpected character '{found}'.")]
    UnexpectedCharacter {
        /// The offending text.
        found:    String,
        /// Byte offset of the offending text.
        position: usize,
    },
    /// A unary `-` with nothing after it.
    #[error("Error at position {position}: Dangling '-' at end of input.")]
    DanglingMinus {
        /// Byte offset of the `-`.
        position: usize,
    },
    /// A numeric literal with no digits, such as a lone `.`.
    #[error("Error at position {position}: Malformed numeric literal '{literal}'.")]
    MalformedLiteral {
        /// The literal as written.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// An integer literal that does not fit in 64 bits.
    #[error("Error at position {position}: Literal '{literal}' is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// A variable written directly after another operand.
    #[error("Error at position {position}: Expected an operator before '{name}'.")]
    MissingOperator {
        /// The variable name.
        name:     String,
        /// Byte offset of the variable.
        position: usize,
    },
    /// A `)` with no matching `(`.
    #[error("Error at position {position}: Closing parenthesis ')' has no matching '('.")]
    UnbalancedParen {
        /// Byte offset of the `)`.
        position: usize,
    },
    /// An operator run that is not in the precedence table.
    #[error("Error at position {position}: Unknown operator '{lexeme}'.")]
    UnknownOperator {
        /// The operator run as written.
        lexeme:   String,
        /// Byte offset of the run.
        position: usize,
    },
    /// An operator applied to operands outside its domain.
    #[error("Error at position {position}: Type error: {details}.")]
    TypeError {
        /// Details about the mismatch.
        details:  String,
        /// Byte offset of the operator.
        position: usize,
    },
    /// A variable read before anything was assigned to it.
    #[error("Error at position {position}: Variable '{name}' is used before it is assigned.")]
    UnboundVariable {
        /// The variable name.
        name:     String,
        /// Byte offset of the reading operator.
        position: usize,
    },
    /// A label with no entry in the value table.
    #[error("Error at position {position}: Unknown label '{label}'.")]
    UnknownLabel {
        /// The label as rendered.
        label:    String,
        /// Byte offset of the label.
        position: usize,
    },
    /// `=` whose left side is not a variable.
    #[error("Error at position {position}: Cannot assign to '{target}', only to a variable.")]
    InvalidAssignment {
        /// The rendered left-hand side.
        target:   String,
        /// Byte offset of the `=`.
        position: usize,
    },
    /// Division or modulus by zero.
    #[error("Error at position {position}: Division by zero.")]
    DivisionByZero {
        /// Byte offset of the operator.
        position: usize,
    },
    /// Integer arithmetic overflowed, or a shift amount was outside `0..64`.
    #[error("Error at position {position}: Integer overflow while trying to compute result.")]
    Overflow {
        /// Byte offset of the operator.
        position: usize,
    },
    /// An operator found fewer operands than it needs.
    #[error("Error at position {position}: Operator '{operator}' is missing an operand.")]
    StackUnderflow {
        /// The operator as written.
        operator: String,
        /// Byte offset of the operator.
        position: usize,
    },
    /// Evaluation finished with the wrong number of values on the stack.
    #[error("Error: Expression left {count} values instead of one. Check for a missing operator.")]
    Residue {
        /// How many values were left.
        count: usize,
    },
}

impl EvalError {
    /// Returns the category this error belongs to.
    ///
    /// # Example
    /// ```
    /// use shunt::error::{ErrorKind, EvalError};
    ///
    /// let err = EvalError::DivisionByZero { position: 1 };
    /// assert_eq!(err.kind(), ErrorKind::Arithmetic);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::UnexpectedCharacter { .. }
            | Self::DanglingMinus { .. }
            | Self::MalformedLiteral { .. }
            | Self::LiteralTooLarge { .. }
            | Self::MissingOperator { .. }
            | Self::UnbalancedParen { .. } => ErrorKind::Syntax,
            Self::UnknownOperator { .. } => ErrorKind::Precedence,
            Self::TypeError { .. } | Self::UnboundVariable { .. } | Self::UnknownLabel { .. } => {
                ErrorKind::Type
            },
            Self::InvalidAssignment { .. } => ErrorKind::Assign,
            Self::DivisionByZero { .. } | Self::Overflow { .. } => ErrorKind::Arithmetic,
            Self::StackUnderflow { .. } => ErrorKind::StackUnderflow,
            Self::Residue { .. } => ErrorKind::Residue,
        }
    }

    /// Returns the byte offset the error points at, when it has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyInput | Self::Residue { .. } => None,
            Self::UnexpectedCharacter { position, .. }
            | Self::DanglingMinus { position }
            | Self::MalformedLiteral { position, .. }
            | Self::LiteralTooLarge { position, .. }
            | Self::MissingOperator { position, .. }
            | Self::UnbalancedParen { position }
            | Self::UnknownOperator { position, .. }
            | Self::TypeError { position, .. }
            | Self::UnboundVariable { position, .. }
            | Self::UnknownLabel { position, .. }
            | Self::InvalidAssignment { position, .. }
            | Self::DivisionByZero { position }
            | Self::Overflow { position }
            | Self::StackUnderflow { position, .. } => Some(*position),
        }
    }
}
