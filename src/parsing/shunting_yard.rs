
//! Conversion from infix to postfix (Reverse Polish) order with the
//! shunting yard algorithm.

use super::operator::Operator;
use super::token::{Token, postfix_to_string};
use crate::error::{CalcError, MissingOperatorCause};
use crate::stack::Stack;

use log::{debug, trace};

/// An entry on the converter's operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackEntry {
  Operator(Operator),
  OpenParen,
}

/// Reorders an infix token sequence into postfix order.
///
/// Literals go straight to the output. Operators wait on a stack
/// until an operator which binds less tightly (or a closing
/// parenthesis, or the end of input) forces them out.
pub fn infix_to_postfix<I>(tokens: I) -> Result<Vec<Token>, CalcError>
where I: IntoIterator<Item = Token> {
  let mut operator_stack: Stack<StackEntry> = Stack::new();
  let mut output: Vec<Token> = Vec::new();
  for token in tokens {
    trace!("converting {}, operator stack {:?}", token, operator_stack);
    match token {
      Token::Literal(_) => {
        if token.as_number().is_none() {
          return Err(CalcError::not_a_number(token.to_string()));
        }
        output.push(token);
      }
      Token::Operator(op) => {
        // Pop operators until we hit one which binds less tightly.
        while let Some(&StackEntry::Operator(top)) = operator_stack.peek() {
          if !should_pop(top, op) {
            break;
          }
          operator_stack.pop()?;
          output.push(Token::Operator(top));
        }
        operator_stack.push(StackEntry::Operator(op));
      }
      Token::LeftParen => {
        operator_stack.push(StackEntry::OpenParen);
      }
      Token::RightParen => {
        loop {
          match operator_stack.pop() {
            Ok(StackEntry::Operator(op)) => output.push(Token::Operator(op)),
            Ok(StackEntry::OpenParen) => break,
            Err(_) => return Err(MissingOperatorCause::UnmatchedCloseParen.into()),
          }
        }
      }
    }
  }

  // Pop and emit remaining operators.
  while let Ok(entry) = operator_stack.pop() {
    match entry {
      StackEntry::Operator(op) => output.push(Token::Operator(op)),
      StackEntry::OpenParen => return Err(MissingOperatorCause::UnclosedOpenParen.into()),
    }
  }

  debug!("postfix: {}", postfix_to_string(&output));
  Ok(output)
}

/// Whether the operator on top of the stack must be emitted before
/// `current_op` is pushed. Ties go to the stack only when
/// `current_op` is left associative, so `^` chains group to the
/// right.
fn should_pop(stack_op: Operator, current_op: Operator) -> bool {
  stack_op.precedence() > current_op.precedence() ||
    (stack_op.precedence() == current_op.precedence() && current_op.associativity().is_left_assoc())
}
