use std::{fmt, str::FromStr};

use crate::{
    error::EvalError,
    interpreter::{lexer::decode_postfix, value::table::Label},
};

/// Marks every label reference, and in postfix every operator, when a
/// canonical form is written out as text.
pub const PREFIX: char = '`';
/// Marks a unary negation in the text form of a canonical stream.
pub const UNARY_MINUS: char = '#';

/// Precedence of `(`. Never popped by comparison, only by a matching `)`.
pub const STICKY: u8 = 0;
/// Precedence shared by the prefix unary operators `~`, `!` and unary minus.
pub const PREFIX_UNARY: u8 = 12;
/// Precedence of `)`, which unwinds the operator stack to the matching `(`.
pub const FORCE_UNWIND: u8 = 13;

/// Represents an operator lexeme.
///
/// Covers every binary operator plus the two prefix operators that are
/// written as themselves (`~`, `!`). Unary minus is not an operator here; it
/// has its own [`Lexeme::UnaryMinus`] so it can never be confused with
/// subtraction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Assignment (`=`)
    Assign,
    /// Logical or (`||`)
    Or,
    /// Logical and (`&&`)
    And,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Bitwise and (`&`)
    BitAnd,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Left shift (`<<`)
    ShiftLeft,
    /// Arithmetic right shift (`>>`)
    ShiftRight,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Bitwise complement (`~`)
    BitNot,
    /// Logical not (`!`)
    Not,
}

impl Operator {
    /// Looks up the operator spelled `lexeme`.
    ///
    /// # Example
    /// ```
    /// use shunt::canonical::Operator;
    ///
    /// assert_eq!(Operator::from_lexeme("<<"), Some(Operator::ShiftLeft));
    /// assert_eq!(Operator::from_lexeme("+="), None);
    /// ```
    #[must_use]
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        use Operator::{
            Add, And, Assign, BitAnd, BitNot, BitOr, BitXor, Div, Equal, Greater, GreaterEqual,
            Less, LessEqual, Mod, Mul, Not, NotEqual, Or, ShiftLeft, ShiftRight, Sub,
        };

        Some(match lexeme {
            "=" => Assign,
            "||" => Or,
            "&&" => And,
            "|" => BitOr,
            "^" => BitXor,
            "&" => BitAnd,
            "==" => Equal,
            "!=" => NotEqual,
            "<" => Less,
            ">" => Greater,
            "<=" => LessEqual,
            ">=" => GreaterEqual,
            "<<" => ShiftLeft,
            ">>" => ShiftRight,
            "+" => Add,
            "-" => Sub,
            "*" => Mul,
            "/" => Div,
            "%" => Mod,
            "~" => BitNot,
            "!" => Not,
            _ => return None,
        })
    }

    /// The operator as written in source text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        use Operator::{
            Add, And, Assign, BitAnd, BitNot, BitOr, BitXor, Div, Equal, Greater, GreaterEqual,
            Less, LessEqual, Mod, Mul, Not, NotEqual, Or, ShiftLeft, ShiftRight, Sub,
        };

        match self {
            Assign => "=",
            Or => "||",
            And => "&&",
            BitOr => "|",
            BitXor => "^",
            BitAnd => "&",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            ShiftLeft => "<<",
            ShiftRight => ">>",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            BitNot => "~",
            Not => "!",
        }
    }

    /// Binding strength; higher binds tighter.
    ///
    /// ```text
    ///  1  =            7  == !=
    ///  2  ||           8  < > <= >=
    ///  3  &&           9  << >>
    ///  4  |           10  + -
    ///  5  ^           11  * / %
    ///  6  &           12  ~ ! (and unary minus)
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        use Operator::{
            Add, And, Assign, BitAnd, BitNot, BitOr, BitXor, Div, Equal, Greater, GreaterEqual,
            Less, LessEqual, Mod, Mul, Not, NotEqual, Or, ShiftLeft, ShiftRight, Sub,
        };

        match self {
            Assign => 1,
            Or => 2,
            And => 3,
            BitOr => 4,
            BitXor => 5,
            BitAnd => 6,
            Equal | NotEqual => 7,
            Less | Greater | LessEqual | GreaterEqual => 8,
            ShiftLeft | ShiftRight => 9,
            Add | Sub => 10,
            Mul | Div | Mod => 11,
            BitNot | Not => PREFIX_UNARY,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of a canonical stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Lexeme {
    /// A reference to a value table entry.
    Operand(Label),
    /// An operator.
    Op(Operator),
    /// Prefix negation, distinct from subtraction.
    UnaryMinus,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl Lexeme {
    /// Precedence of the lexeme, or `None` for operands.
    #[must_use]
    pub const fn precedence(&self) -> Option<u8> {
        match self {
            Self::Operand(_) => None,
            Self::LParen => Some(STICKY),
            Self::Op(op) => Some(op.precedence()),
            Self::UnaryMinus => Some(PREFIX_UNARY),
            Self::RParen => Some(FORCE_UNWIND),
        }
    }

    /// Whether an operator of equal precedence already on the stack should
    /// stay there when this one arrives.
    ///
    /// True only for the prefix unary operators, so `!!x` nests. Every
    /// binary operator, `=` included, groups from the left.
    #[must_use]
    pub const fn is_right_associative(&self) -> bool {
        matches!(self, Self::UnaryMinus | Self::Op(Operator::BitNot | Operator::Not))
    }

    /// Whether the lexeme is anything other than an operand.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        !matches!(self, Self::Operand(_))
    }

    /// The operand label, if this is an operand.
    #[must_use]
    pub const fn label(&self) -> Option<&Label> {
        match self {
            Self::Operand(label) => Some(label),
            _ => None,
        }
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand(label) => write!(f, "{PREFIX}{label}"),
            Self::Op(op) => write!(f, "{op}"),
            Self::UnaryMinus => write!(f, "{UNARY_MINUS}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Canonical infix: whitespace-free, every operand replaced by a label,
/// unary minus and implicit multiplication made explicit.
///
/// Each lexeme is paired with the byte offset of the source text it came
/// from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Infix {
    lexemes: Vec<(Lexeme, usize)>,
}

impl Infix {
    /// Wraps a lexeme sequence.
    #[must_use]
    pub const fn new(lexemes: Vec<(Lexeme, usize)>) -> Self {
        Self { lexemes }
    }

    /// The lexemes with their source positions.
    #[must_use]
    pub fn lexemes(&self) -> &[(Lexeme, usize)] {
        &self.lexemes
    }

    /// Consumes the stream, returning its lexemes.
    #[must_use]
    pub fn into_lexemes(self) -> Vec<(Lexeme, usize)> {
        self.lexemes
    }

    /// Operand labels in stream order.
    pub fn operands(&self) -> impl Iterator<Item = &Label> {
        self.lexemes.iter().filter_map(|(lexeme, _)| lexeme.label())
    }

    /// Number of lexemes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    /// Whether the stream has no lexemes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }
}

impl fmt::Display for Infix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.lexemes.iter().try_for_each(|(lexeme, _)| write!(f, "{lexeme}"))
    }
}

/// Canonical postfix: operands and operators in evaluation order.
///
/// In text form every lexeme, operator or operand, is preceded by
/// [`PREFIX`], which is what makes multi-character lexemes recoverable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix {
    lexemes: Vec<(Lexeme, usize)>,
}

impl Postfix {
    /// Wraps a lexeme sequence.
    #[must_use]
    pub const fn new(lexemes: Vec<(Lexeme, usize)>) -> Self {
        Self { lexemes }
    }

    /// The lexemes with their source positions.
    #[must_use]
    pub fn lexemes(&self) -> &[(Lexeme, usize)] {
        &self.lexemes
    }

    /// Operand labels in stream order.
    pub fn operands(&self) -> impl Iterator<Item = &Label> {
        self.lexemes.iter().filter_map(|(lexeme, _)| lexeme.label())
    }

    /// Number of lexemes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    /// Whether the stream has no lexemes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (lexeme, _) in &self.lexemes {
            match lexeme {
                Lexeme::Operand(_) => write!(f, "{lexeme}")?,
                _ => write!(f, "{PREFIX}{lexeme}")?,
            }
        }
        Ok(())
    }
}

impl FromStr for Postfix {
    type Err = EvalError;

    /// Decodes the text form written by `Display`.
    ///
    /// Positions in the result are byte offsets into `text`.
    ///
    /// # Example
    /// ```
    /// use shunt::canonical::Postfix;
    ///
    /// let postfix: Postfix = "`0`x`+`#".parse().unwrap();
    /// assert_eq!(postfix.len(), 4);
    /// assert_eq!(postfix.to_string(), "`0`x`+`#");
    /// ```
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        decode_postfix(text).map(Self::new)
    }
}
