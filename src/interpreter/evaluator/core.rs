use log::trace;

use crate::{
    canonical::{Lexeme, Operator, Postfix},
    error::EvalError,
    interpreter::{
        evaluator::unary::UnaryOperator,
        value::{
            scalar::Scalar,
            table::{Label, ValueTable},
        },
    },
};

/// Result type used throughout the pipeline.
///
/// Every stage returns either a value of type `T` or the [`EvalError`]
/// describing the first failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// The postfix stack machine.
///
/// The operand stack holds labels, never values: each operator reads its
/// operands through the [`ValueTable`], stores its result under a fresh
/// label and pushes that label. This keeps a variable's identity intact on
/// the stack, so `=` can rebind the variable itself. Each stacked label is
/// paired with the position of the lexeme that produced it.
pub struct Evaluator<'t> {
    table: &'t mut ValueTable,
    stack: Vec<(Label, usize)>,
}

impl<'t> Evaluator<'t> {
    /// Creates a machine with an empty stack working on `table`.
    pub const fn new(table: &'t mut ValueTable) -> Self {
        Self { table,
               stack: Vec::new() }
    }

    /// Executes every lexeme of `postfix` and returns the final value.
    ///
    /// # Errors
    /// Any error from [`Evaluator::step`] or [`Evaluator::finish`].
    pub fn run(mut self, postfix: &Postfix) -> EvalResult<Scalar> {
        for (lexeme, position) in postfix.lexemes() {
            self.step(lexeme, *position)?;
        }
        self.finish()
    }

    /// Executes a single lexeme.
    ///
    /// Operands are pushed as they are. Unary operators pop one label,
    /// binary operators pop the right operand and then the left one.
    ///
    /// # Errors
    /// - `UnknownLabel` for an operand the table has no entry for.
    /// - `StackUnderflow` when an operator finds too few operands.
    /// - `UnknownOperator` for a parenthesis, which has no meaning in
    ///   postfix.
    /// - Any error raised by the operation itself.
    pub fn step(&mut self, lexeme: &Lexeme, position: usize) -> EvalResult<()> {
        match lexeme {
            Lexeme::Operand(label) => {
                if !self.table.contains(label) {
                    return Err(EvalError::UnknownLabel { label: label.to_string(),
                                                         position });
                }
                self.stack.push((label.clone(), position));
                Ok(())
            },
            Lexeme::Op(Operator::Assign) => self.assign(lexeme, position),
            Lexeme::LParen | Lexeme::RParen => {
                Err(EvalError::UnknownOperator { lexeme: lexeme.to_string(),
                                                 position })
            },
            _ => {
                if let Some(op) = UnaryOperator::from_lexeme(lexeme) {
                    let (label, origin) = self.pop(lexeme, position)?;
                    let value = self.read(&label, origin)?;
                    let result = Self::eval_unary(op, value, position)?;
                    self.push_result(lexeme, result, position);
                } else if let Lexeme::Op(op) = lexeme {
                    let (right, right_origin) = self.pop(lexeme, position)?;
                    let (left, left_origin) = self.pop(lexeme, position)?;
                    let left = self.read(&left, left_origin)?;
                    let right = self.read(&right, right_origin)?;
                    let result = Self::eval_binary(*op, left, right, position)?;
                    self.push_result(lexeme, result, position);
                }
                Ok(())
            },
        }
    }

    /// Checks that exactly one label is left and returns its value.
    ///
    /// # Errors
    /// - `Residue` when the stack does not hold exactly one label.
    /// - `UnboundVariable` when the last label is a variable that was never
    ///   assigned.
    pub fn finish(mut self) -> EvalResult<Scalar> {
        if self.stack.len() != 1 {
            return Err(EvalError::Residue { count: self.stack.len() });
        }

        match self.stack.pop() {
            Some((label, origin)) => self.read(&label, origin),
            None => Err(EvalError::Residue { count: 0 }),
        }
    }

    /// Rebinds the variable below the top of the stack to the value on top,
    /// then pushes the variable back.
    fn assign(&mut self, lexeme: &Lexeme, position: usize) -> EvalResult<()> {
        let (source, source_origin) = self.pop(lexeme, position)?;
        let (target, target_origin) = self.pop(lexeme, position)?;

        if !target.is_named() {
            let rendered = self.table
                               .get(&target)
                               .map_or_else(|| target.to_string(), ToString::to_string);
            return Err(EvalError::InvalidAssignment { target: rendered,
                                                      position });
        }

        let value = self.read(&source, source_origin)?;
        trace!("{target} := {value}");
        self.table.rebind(&target, value);
        self.stack.push((target, target_origin));

        Ok(())
    }

    fn pop(&mut self, operator: &Lexeme, position: usize) -> EvalResult<(Label, usize)> {
        self.stack
            .pop()
            .ok_or_else(|| EvalError::StackUnderflow { operator: operator.to_string(),
                                                       position })
    }

    /// Reads the value behind a label, refusing unassigned variables.
    fn read(&self, label: &Label, position: usize) -> EvalResult<Scalar> {
        match self.table.get(label) {
            None => Err(EvalError::UnknownLabel { label: label.to_string(),
                                                  position }),
            Some(Scalar::Null) => Err(EvalError::UnboundVariable { name: label.to_string(),
                                                                   position }),
            Some(value) => Ok(*value),
        }
    }

    fn push_result(&mut self, lexeme: &Lexeme, result: Scalar, position: usize) {
        let label = self.table.store(result);
        trace!("{lexeme} -> {label} = {result}");
        self.stack.push((label, position));
    }
}

/// Evaluates canonical postfix against `table`.
///
/// Intermediate results and assignments are written into `table`, so after
/// the call it holds the final state of every variable.
///
/// # Errors
/// Any error from the stack machine; see [`Evaluator::step`] and
/// [`Evaluator::finish`].
///
/// # Example
/// ```
/// use shunt::{
///     canonical::Postfix,
///     interpreter::{
///         evaluator::core::evaluate_postfix,
///         value::{scalar::Scalar, table::ValueTable},
///     },
/// };
///
/// let mut table = ValueTable::new();
/// table.store(Scalar::Integer(7));
/// table.store(Scalar::Integer(2));
///
/// let postfix: Postfix = "`0`1`/".parse().unwrap();
/// assert_eq!(evaluate_postfix(&postfix, &mut table).unwrap(), Scalar::Real(3.5));
/// ```
pub fn evaluate_postfix(postfix: &Postfix, table: &mut ValueTable) -> EvalResult<Scalar> {
    Evaluator::new(table).run(postfix)
}
