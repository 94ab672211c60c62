
use super::operator::Operator;

use itertools::Itertools;

use std::fmt::{self, Display, Formatter};

/// A single lexical unit of an arithmetic expression.
///
/// Numeric literals are kept as the text that spelled them; the
/// converter and evaluator are responsible for parsing that text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
  Literal(String),
  Operator(Operator),
  LeftParen,
  RightParen,
}

impl Token {
  pub fn literal(text: impl Into<String>) -> Self {
    Token::Literal(text.into())
  }

  /// Parses the token as a floating-point number. Returns `None` for
  /// operators, parentheses, and malformed literals such as `1.2.3`.
  pub fn as_number(&self) -> Option<f64> {
    match self {
      Token::Literal(text) => text.parse().ok(),
      _ => None,
    }
  }
}

impl From<Operator> for Token {
  fn from(op: Operator) -> Self {
    Token::Operator(op)
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Token::Literal(text) => write!(f, "{}", text),
      Token::Operator(op) => write!(f, "{}", op),
      Token::LeftParen => write!(f, "("),
      Token::RightParen => write!(f, ")"),
    }
  }
}

/// Renders a token sequence with one space between tokens, which is
/// the conventional way to write a postfix expression.
pub fn postfix_to_string<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> String {
  tokens.into_iter().join(" ")
}
