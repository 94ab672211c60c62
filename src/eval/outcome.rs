
use std::fmt::{self, Display, Formatter};

/// The successful outcome of evaluating an expression.
///
/// An empty expression is not an error, but it does not have a value
/// either, so it gets its own variant rather than a numeric sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
  Value(f64),
  NoInput,
}

impl Evaluation {
  pub fn value(self) -> Option<f64> {
    match self {
      Evaluation::Value(x) => Some(x),
      Evaluation::NoInput => None,
    }
  }

  pub fn is_no_input(self) -> bool {
    matches!(self, Evaluation::NoInput)
  }

  /// Collapses the evaluation to a plain number, using NaN to stand
  /// for "no input". Prefer matching on the variants where possible.
  pub fn to_f64(self) -> f64 {
    self.value().unwrap_or(f64::NAN)
  }
}

impl From<f64> for Evaluation {
  fn from(x: f64) -> Self {
    Evaluation::Value(x)
  }
}

impl Display for Evaluation {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Evaluation::Value(x) => write!(f, "{}", x),
      Evaluation::NoInput => write!(f, "(no input)"),
    }
  }
}
