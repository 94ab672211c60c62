
use crate::parsing::operator::Operator;
use crate::parsing::source::SourceOffset;
use crate::stack::StackError;

use thiserror::Error;

/// Every way evaluating an expression can fail. A failure always
/// aborts the whole evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalcError {
  #[error("Missing or bad operand: {0}")]
  MissingOperand(BadOperand),
  #[error("Missing operator or parenthesis: {0}")]
  MissingOperator(MissingOperatorCause),
  #[error("Operator not found: {0:?}")]
  OperatorNotFound(char),
  #[error("Division with 0")]
  DivisionByZero,
  #[error("Result of {0} is not a finite number")]
  NotFinite(Operator),
  #[error("Missing operand: {0}")]
  Stack(#[from] StackError),
}

/// Detail for [`CalcError::MissingOperand`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BadOperand {
  #[error("unexpected character {found:?} at position {position}")]
  ForeignCharacter {
    found: char,
    position: SourceOffset,
  },
  #[error("{0:?} is not a number")]
  NotANumber(String),
}

/// Detail for [`CalcError::MissingOperator`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissingOperatorCause {
  #[error("')' has no matching '('")]
  UnmatchedCloseParen,
  #[error("'(' is never closed")]
  UnclosedOpenParen,
  #[error("{count} operands were left without an operator")]
  LeftoverOperands {
    count: usize,
  },
}

impl CalcError {
  pub fn foreign_character(found: char, position: SourceOffset) -> Self {
    CalcError::MissingOperand(BadOperand::ForeignCharacter { found, position })
  }

  pub fn not_a_number(literal: impl Into<String>) -> Self {
    CalcError::MissingOperand(BadOperand::NotANumber(literal.into()))
  }

  pub fn is_missing_operand(&self) -> bool {
    matches!(self, CalcError::MissingOperand(_))
  }

  pub fn is_missing_operator(&self) -> bool {
    matches!(self, CalcError::MissingOperator(_))
  }
}

impl From<BadOperand> for CalcError {
  fn from(err: BadOperand) -> Self {
    CalcError::MissingOperand(err)
  }
}

impl From<MissingOperatorCause> for CalcError {
  fn from(err: MissingOperatorCause) -> Self {
    CalcError::MissingOperator(err)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_messages() {
    assert_eq!(
      CalcError::foreign_character('a', SourceOffset(2)).to_string(),
      "Missing or bad operand: unexpected character 'a' at position 2",
    );
    assert_eq!(
      CalcError::not_a_number("1.2.3").to_string(),
      "Missing or bad operand: \"1.2.3\" is not a number",
    );
    assert_eq!(
      CalcError::from(MissingOperatorCause::UnclosedOpenParen).to_string(),
      "Missing operator or parenthesis: '(' is never closed",
    );
    assert_eq!(CalcError::OperatorNotFound('%').to_string(), "Operator not found: '%'");
    assert_eq!(CalcError::DivisionByZero.to_string(), "Division with 0");
    assert_eq!(CalcError::NotFinite(Operator::Power).to_string(), "Result of ^ is not a finite number");
  }

  #[test]
  fn test_stack_error_conversion() {
    let err = CalcError::from(StackError::NotEnoughElements { expected: 2, actual: 1 });
    assert_eq!(
      err.to_string(),
      "Missing operand: Not enough stack elements, expected at least 2 but found 1.",
    );
  }

  #[test]
  fn test_kind_predicates() {
    assert!(CalcError::not_a_number(".").is_missing_operand());
    assert!(!CalcError::DivisionByZero.is_missing_operand());
    assert!(CalcError::from(MissingOperatorCause::UnmatchedCloseParen).is_missing_operator());
    assert!(!CalcError::OperatorNotFound('x').is_missing_operator());
  }
}
