use log::debug;

use crate::{
    canonical::{Infix, Lexeme, Postfix},
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
};

/// Converts canonical infix into canonical postfix.
///
/// Operands go straight to the output. Operators wait on an operator stack
/// until an incoming operator of lower precedence (or equal precedence, for
/// left-associative operators) pushes them out. `(` is sticky: only the
/// matching `)` removes it, and neither parenthesis reaches the output. A
/// `(` still open at the end of input is closed implicitly.
///
/// # Errors
/// - `UnbalancedParen` for a `)` with no matching `(`.
///
/// # Example
/// ```
/// use shunt::interpreter::{normalizer::normalize, shunter::shunt};
///
/// let (infix, _) = normalize("1 + 2 * 3").unwrap();
/// assert_eq!(shunt(&infix).unwrap().to_string(), "`0`1`2`*`+");
///
/// let (infix, _) = normalize("(1 + 2) * 3").unwrap();
/// assert_eq!(shunt(&infix).unwrap().to_string(), "`0`1`+`2`*");
/// ```
pub fn shunt(infix: &Infix) -> EvalResult<Postfix> {
    let mut output: Vec<(Lexeme, usize)> = Vec::with_capacity(infix.len());
    let mut operators: Vec<(Lexeme, usize)> = Vec::new();

    for (lexeme, position) in infix.lexemes() {
        match lexeme {
            Lexeme::Operand(_) => output.push((lexeme.clone(), *position)),
            Lexeme::LParen => operators.push((Lexeme::LParen, *position)),
            Lexeme::RParen => loop {
                match operators.pop() {
                    None => return Err(EvalError::UnbalancedParen { position: *position }),
                    Some((Lexeme::LParen, _)) => break,
                    Some(op) => output.push(op),
                }
            },
            _ => {
                let incoming = precedence(lexeme, *position)?;
                while let Some((top, top_position)) = operators.last() {
                    if !yields_to(top, *top_position, incoming, lexeme)? {
                        break;
                    }
                    if let Some(op) = operators.pop() {
                        output.push(op);
                    }
                }
                operators.push((lexeme.clone(), *position));
            },
        }
    }

    while let Some((op, position)) = operators.pop() {
        if op != Lexeme::LParen {
            output.push((op, position));
        }
    }

    let postfix = Postfix::new(output);
    debug!("shunted into {postfix}");

    Ok(postfix)
}

/// Looks up the precedence of an operator lexeme.
///
/// # Errors
/// `UnknownOperator` if `lexeme` is not an operator.
pub fn precedence(lexeme: &Lexeme, position: usize) -> EvalResult<u8> {
    lexeme.precedence()
          .ok_or_else(|| EvalError::UnknownOperator { lexeme: lexeme.to_string(),
                                                      position })
}

/// Whether the operator on top of the stack must move to the output before
/// `incoming` is pushed.
fn yields_to(top: &Lexeme, top_position: usize, incoming: u8, lexeme: &Lexeme) -> EvalResult<bool> {
    if *top == Lexeme::LParen {
        return Ok(false);
    }

    let stacked = precedence(top, top_position)?;
    Ok(stacked > incoming || (stacked == incoming && !lexeme.is_right_associative()))
}
