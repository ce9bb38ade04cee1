use logos::{Lexer, Logos};

use crate::{
    canonical::{Lexeme, Operator, PREFIX},
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        scan::{scan_identifier, scan_number, scan_operator},
        value::{scalar::Scalar, table::Label},
    },
};

/// Errors raised inside the lexers.
///
/// These carry no context; [`LexError::into_eval_error`] attaches the
/// offending slice and its position once the lexer has reported it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexError {
    /// Input that no token matches.
    #[default]
    UnexpectedCharacter,
    /// A number with no digits.
    MalformedLiteral,
    /// An integer that does not fit in `i64`.
    LiteralTooLarge,
    /// An operator run with no entry in the precedence table.
    UnknownOperator,
}

impl LexError {
    /// Attaches the offending text and its byte offset.
    #[must_use]
    pub fn into_eval_error(self, slice: &str, position: usize) -> EvalError {
        match self {
            Self::UnexpectedCharacter => EvalError::UnexpectedCharacter { found: slice.to_string(),
                                                                          position },
            Self::MalformedLiteral => EvalError::MalformedLiteral { literal: slice.to_string(),
                                                                    position },
            Self::LiteralTooLarge => EvalError::LiteralTooLarge { literal: slice.to_string(),
                                                                  position },
            Self::UnknownOperator => EvalError::UnknownOperator { lexeme: slice.to_string(),
                                                                  position },
        }
    }
}

/// Represents a lexical token of raw input.
///
/// Each token is started by a single character and then extended by the
/// matching extractor from [`crate::interpreter::scan`], so the extractors
/// decide where a number, identifier or operator run ends. Spaces and tabs
/// are skipped.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    /// Numeric literals such as `42`, `3.5`, `.5` or `5.`.
    #[regex(r"[0-9]", lex_number)]
    #[token(".", lex_number)]
    Number(Scalar),
    /// Identifiers such as `x` or `rate2`.
    #[regex(r"[a-zA-Z]", lex_identifier)]
    Identifier(String),
    /// `-`, kept apart from the other operators because its meaning depends
    /// on what precedes it.
    #[token("-")]
    Minus,
    /// Every other operator.
    #[token("+", lex_operator)]
    #[token("*", lex_operator)]
    #[token("/", lex_operator)]
    #[token("%", lex_operator)]
    #[token("^", lex_operator)]
    #[token("|", lex_operator)]
    #[token("&", lex_operator)]
    #[token("~", lex_operator)]
    #[token("!", lex_operator)]
    #[token("=", lex_operator)]
    #[token("<", lex_operator)]
    #[token(">", lex_operator)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Extends the current token over the rest of the number and parses it.
///
/// Numbers with a decimal point become reals, all others integers.
fn lex_number(lex: &mut Lexer<Token>) -> Result<Scalar, LexError> {
    let source = lex.source();
    let (text, end, had_decimal) = scan_number(source, lex.span().start);
    lex.bump(end - lex.span().end);

    if !text.bytes().any(|b| b.is_ascii_digit()) {
        return Err(LexError::MalformedLiteral);
    }

    if had_decimal {
        text.parse().map(Scalar::Real).map_err(|_| LexError::MalformedLiteral)
    } else {
        text.parse().map(Scalar::Integer).map_err(|_| LexError::LiteralTooLarge)
    }
}

/// Extends the current token over the rest of the identifier.
fn lex_identifier(lex: &mut Lexer<Token>) -> String {
    let source = lex.source();
    let (text, end) = scan_identifier(source, lex.span().start);
    lex.bump(end - lex.span().end);
    text.to_string()
}

/// Extends the current token over the operator run and looks it up.
fn lex_operator(lex: &mut Lexer<Token>) -> Result<Operator, LexError> {
    let source = lex.source();
    let (text, end) = scan_operator(source, lex.span().start);
    lex.bump(end - lex.span().end);
    Operator::from_lexeme(text).ok_or(LexError::UnknownOperator)
}

/// Splits raw input into tokens paired with their byte offsets.
///
/// # Errors
/// Returns the first lexical error: an unexpected character, a malformed or
/// oversized literal, or an unknown operator run.
///
/// # Example
/// ```
/// use shunt::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x <= 2").unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0], (Token::Identifier("x".to_string()), 0));
/// assert_eq!(tokens[2].1, 5);
/// ```
pub fn tokenize(source: &str) -> EvalResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(e) => return Err(e.into_eval_error(lexer.slice(), position)),
        }
    }

    Ok(tokens)
}

/// Represents a lexical token of the text form of canonical postfix.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
enum CanonicalToken {
    /// `` `12 ``
    #[regex(r"`[0-9]+", |lex| lex.slice()[1..].parse::<usize>().map_err(|_| LexError::LiteralTooLarge))]
    Auto(usize),
    /// `` `rate ``
    #[regex(r"`[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice()[1..].to_string())]
    Named(String),
    /// `` `# ``
    #[token("`#")]
    UnaryMinus,
    /// `` `<= ``
    #[regex(r"`[^`#0-9a-zA-Z]+", |lex| Operator::from_lexeme(&lex.slice()[1..]).ok_or(LexError::UnknownOperator))]
    Operator(Operator),
}

/// Decodes the text form of canonical postfix.
///
/// # Errors
/// Returns an error for text that is not a sequence of `PREFIX`-led labels
/// and operators, or for an operator that does not exist.
pub fn decode_postfix(text: &str) -> EvalResult<Vec<(Lexeme, usize)>> {
    let mut lexemes = Vec::new();
    let mut lexer = CanonicalToken::lexer(text);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        let lexeme = match token {
            Ok(CanonicalToken::Auto(n)) => Lexeme::Operand(Label::Auto(n)),
            Ok(CanonicalToken::Named(name)) => Lexeme::Operand(Label::Named(name)),
            Ok(CanonicalToken::UnaryMinus) => Lexeme::UnaryMinus,
            Ok(CanonicalToken::Operator(op)) => Lexeme::Op(op),
            Err(e) => {
                let slice = lexer.slice();
                return Err(e.into_eval_error(slice.strip_prefix(PREFIX).unwrap_or(slice),
                                             position));
            },
        };
        lexemes.push((lexeme, position));
    }

    Ok(lexemes)
}
