
//! The closed set of binary operators understood by the calculator,
//! together with their precedence, associativity, and arithmetic.

mod precedence;
mod associativity;
mod table;

pub use precedence::Precedence;
pub use associativity::Associativity;

use crate::error::CalcError;

use std::fmt::{self, Display, Formatter};

/// A binary infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
  Plus,
  Minus,
  Times,
  Divide,
  Power,
}

/// Static metadata about an [`Operator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
  operator: Operator,
  symbol: char,
  assoc: Associativity,
  prec: Precedence,
}

impl Operator {
  pub const COUNT: usize = 5;

  /// Looks up the operator spelled by `symbol`.
  pub fn from_char(symbol: char) -> Result<Operator, CalcError> {
    table::BY_SYMBOL.get(&symbol).copied().ok_or(CalcError::OperatorNotFound(symbol))
  }

  pub fn info(self) -> &'static OperatorInfo {
    &table::OPERATOR_INFO[self as usize]
  }

  pub fn as_char(self) -> char {
    self.info().symbol
  }

  pub fn precedence(self) -> Precedence {
    self.info().prec
  }

  pub fn associativity(self) -> Associativity {
    self.info().assoc
  }

  /// Applies the operator to two operands taken off an operand stack.
  /// `d1` is the operand popped first (the right-hand side) and `d2`
  /// the one popped after it (the left-hand side).
  pub fn apply(self, d1: f64, d2: f64) -> Result<f64, CalcError> {
    match self {
      Operator::Plus => Ok(d1 + d2),
      Operator::Minus => Ok(d2 - d1),
      Operator::Times => Ok(d1 * d2),
      Operator::Divide => {
        if d1 == 0.0 {
          Err(CalcError::DivisionByZero)
        } else {
          Ok(d2 / d1)
        }
      }
      Operator::Power => Ok(d2.powf(d1)),
    }
  }
}

impl OperatorInfo {
  pub(crate) const fn new(
    operator: Operator,
    symbol: char,
    assoc: Associativity,
    prec: Precedence,
  ) -> Self {
    Self { operator, symbol, assoc, prec }
  }

  pub fn operator(&self) -> Operator {
    self.operator
  }

  pub fn symbol(&self) -> char {
    self.symbol
  }

  pub fn associativity(&self) -> Associativity {
    self.assoc
  }

  pub fn precedence(&self) -> Precedence {
    self.prec
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_char())
  }
}

impl TryFrom<char> for Operator {
  type Error = CalcError;

  fn try_from(symbol: char) -> Result<Self, Self::Error> {
    Operator::from_char(symbol)
  }
}
