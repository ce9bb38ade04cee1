use log::debug;

use crate::{
    canonical::{Infix, Lexeme, Operator},
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        lexer::{Token, tokenize},
        value::{
            scalar::Scalar,
            table::{Label, ValueTable},
        },
    },
};

/// Normalizes raw input into canonical infix and a fresh value table.
///
/// See [`normalize_with`].
///
/// # Example
/// ```
/// use shunt::interpreter::{normalizer::normalize, value::scalar::Scalar};
///
/// let (infix, table) = normalize("2(x - -3)").unwrap();
/// assert_eq!(infix.to_string(), "`0*(`x-`1)");
/// assert_eq!(table.variable("x"), Some(&Scalar::Null));
/// ```
pub fn normalize(source: &str) -> EvalResult<(Infix, ValueTable)> {
    normalize_with(source, ValueTable::new())
}

/// Normalizes raw input into canonical infix, registering every operand in
/// `table`.
///
/// Literals are stored under auto-labels in source order; `true` and `false`
/// are boolean literals. Variables keep their spelling as label and are
/// registered as `Null` unless `table` already binds them. The lexeme
/// sequence then goes through [`canonicalize`].
///
/// # Errors
/// - `EmptyInput` if there is nothing but whitespace.
/// - Any lexical error from the tokenizer.
/// - Any error from [`canonicalize`].
pub fn normalize_with(source: &str, mut table: ValueTable) -> EvalResult<(Infix, ValueTable)> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(EvalError::EmptyInput);
    }

    let lexemes = tokens.into_iter()
                        .map(|(token, position)| (label_token(token, &mut table), position))
                        .collect();

    let infix = canonicalize(lexemes, &mut table)?;
    debug!("normalized {source:?} into {infix}");

    Ok((infix, table))
}

/// Turns one raw token into a lexeme, storing any operand in the table.
///
/// Every `-` becomes subtraction here; [`canonicalize`] decides which ones
/// are really negations.
fn label_token(token: Token, table: &mut ValueTable) -> Lexeme {
    match token {
        Token::Number(value) => Lexeme::Operand(table.store(value)),
        Token::Identifier(name) => match name.as_str() {
            "true" => Lexeme::Operand(table.store(Scalar::Bool(true))),
            "false" => Lexeme::Operand(table.store(Scalar::Bool(false))),
            _ => Lexeme::Operand(table.introduce(&name)),
        },
        Token::Minus => Lexeme::Op(Operator::Sub),
        Token::Operator(op) => Lexeme::Op(op),
        Token::LParen => Lexeme::LParen,
        Token::RParen => Lexeme::RParen,
    }
}

/// Resolves `-` and inserts implicit multiplication.
///
/// A `-` is a negation when nothing has been emitted yet or the last emitted
/// lexeme is an operator other than `)`. A negation is then
/// - folded into the next literal when that literal is numeric,
/// - cancelled together with a directly following `-`,
/// - emitted as [`Lexeme::UnaryMinus`] before `(` or a variable,
/// - left as subtraction before anything else.
///
/// `*` is inserted between an operand and `(`, and between `)` and an
/// operand. A variable written directly after another operand is rejected.
///
/// Running this over its own output changes nothing.
///
/// # Errors
/// - `DanglingMinus` for a negation at the very end, including a cancelled
///   pair such as the `--` in `3 * --`.
/// - `MissingOperator` for a variable directly after another operand.
pub fn canonicalize(lexemes: Vec<(Lexeme, usize)>, table: &mut ValueTable) -> EvalResult<Infix> {
    let mut output: Vec<(Lexeme, usize)> = Vec::with_capacity(lexemes.len());
    let mut iter = lexemes.into_iter().peekable();

    while let Some((lexeme, position)) = iter.next() {
        match lexeme {
            Lexeme::Op(Operator::Sub) if in_unary_position(&output) => match iter.peek() {
                None => return Err(EvalError::DanglingMinus { position }),
                Some((Lexeme::Op(Operator::Sub), _)) => {
                    if let Some((_, second)) = iter.next()
                       && iter.peek().is_none()
                    {
                        return Err(EvalError::DanglingMinus { position: second });
                    }
                },
                Some((Lexeme::LParen, _)) => output.push((Lexeme::UnaryMinus, position)),
                Some((Lexeme::Operand(label), _)) => {
                    if !negate_literal(label, table) {
                        output.push((Lexeme::UnaryMinus, position));
                    }
                },
                Some(_) => output.push((Lexeme::Op(Operator::Sub), position)),
            },
            Lexeme::LParen => {
                if matches!(output.last(), Some((Lexeme::Operand(_), _))) {
                    output.push((Lexeme::Op(Operator::Mul), position));
                }
                output.push((Lexeme::LParen, position));
            },
            Lexeme::Operand(label) => {
                let previous = output.last().map(|(lexeme, _)| lexeme);
                if matches!(previous, Some(Lexeme::Operand(_))) && label.is_named() {
                    return Err(EvalError::MissingOperator { name: label.to_string(),
                                                            position });
                }
                if matches!(previous, Some(Lexeme::RParen)) {
                    output.push((Lexeme::Op(Operator::Mul), position));
                }
                output.push((Lexeme::Operand(label), position));
            },
            other => output.push((other, position)),
        }
    }

    Ok(Infix::new(output))
}

/// Whether a `-` arriving now is a negation rather than a subtraction.
fn in_unary_position(output: &[(Lexeme, usize)]) -> bool {
    match output.last() {
        None => true,
        Some((lexeme, _)) => lexeme.is_operator() && *lexeme != Lexeme::RParen,
    }
}

/// Negates a numeric literal in place.
///
/// Returns `false`, leaving the table untouched, when `label` is a variable
/// or a non-numeric literal.
fn negate_literal(label: &Label, table: &mut ValueTable) -> bool {
    if label.is_named() {
        return false;
    }

    match table.get_mut(label) {
        Some(Scalar::Integer(n)) => {
            // Parsed literals are non-negative, so this cannot overflow.
            *n = n.wrapping_neg();
            true
        },
        Some(Scalar::Real(r)) => {
            *r = -*r;
            true
        },
        _ => false,
    }
}
