
//! Evaluation of postfix token sequences, and the composed pipeline
//! from raw expression text to a number.

mod outcome;

pub use outcome::Evaluation;

use crate::error::{CalcError, MissingOperatorCause};
use crate::parsing::Token;
use crate::parsing::shunting_yard::infix_to_postfix;
use crate::parsing::tokenizer::tokenize;
use crate::stack::Stack;

use log::debug;

/// Evaluates a postfix token sequence with an operand stack.
///
/// Each operator consumes the two most recently pushed operands. An
/// empty sequence evaluates to [`Evaluation::NoInput`]. An operator
/// whose result overflows to infinity or is NaN aborts the evaluation
/// with [`CalcError::NotFinite`].
pub fn eval_postfix<I>(tokens: I) -> Result<Evaluation, CalcError>
where I: IntoIterator<Item = Token> {
  let mut operand_stack: Stack<f64> = Stack::new();
  for token in tokens {
    match token {
      Token::Literal(_) => {
        let value = token.as_number().ok_or_else(|| CalcError::not_a_number(token.to_string()))?;
        operand_stack.push(value);
      }
      Token::Operator(op) => {
        // pop_several puts the former top of the stack last.
        let operands = operand_stack.pop_several(2)?;
        let (d2, d1) = (operands[0], operands[1]);
        let result = op.apply(d1, d2)?;
        if !result.is_finite() {
          return Err(CalcError::NotFinite(op));
        }
        operand_stack.push(result);
      }
      Token::LeftParen | Token::RightParen => {
        return Err(CalcError::not_a_number(token.to_string()));
      }
    }
  }

  match operand_stack.len() {
    0 => Ok(Evaluation::NoInput),
    1 => Ok(Evaluation::Value(operand_stack.pop()?)),
    count => Err(MissingOperatorCause::LeftoverOperands { count }.into()),
  }
}

/// Evaluates an infix arithmetic expression.
///
/// The empty string yields [`Evaluation::NoInput`]. Anything else is
/// tokenized, converted to postfix, and evaluated, with the first
/// failure from any stage returned unchanged.
pub fn eval_expr(expr: &str) -> Result<Evaluation, CalcError> {
  if expr.is_empty() {
    return Ok(Evaluation::NoInput);
  }
  let tokens = tokenize(expr)?;
  let postfix = infix_to_postfix(tokens)?;
  let result = eval_postfix(postfix)?;
  debug!("{} = {}", expr, result);
  Ok(result)
}
