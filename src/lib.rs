
//! Evaluation of infix arithmetic expressions over `+ - * / ^` and
//! parentheses.
//!
//! The pipeline has three stages: [`tokenize`](parsing::tokenizer::tokenize)
//! splits the text into tokens,
//! [`infix_to_postfix`](parsing::shunting_yard::infix_to_postfix)
//! reorders them with the shunting yard algorithm, and
//! [`eval_postfix`](eval::eval_postfix) computes the result with an
//! operand stack. [`eval_expr`] runs all three.

#[cfg(test)]
macro_rules! assert_eval_eq {
  ($expr:expr, $expected:expr $(,)?) => {
    match $crate::eval::eval_expr($expr) {
      Ok($crate::eval::Evaluation::Value(actual)) => {
        approx::assert_abs_diff_eq!(actual, $expected, epsilon = 1e-9)
      }
      other => panic!("expected {:?} to evaluate to {}, got {:?}", $expr, $expected, other),
    }
  }
}

pub mod error;
pub mod eval;
pub mod parsing;
pub mod stack;

pub use error::CalcError;
pub use eval::{Evaluation, eval_expr, eval_postfix};
pub use parsing::Token;
pub use parsing::shunting_yard::infix_to_postfix;
pub use parsing::tokenizer::tokenize;
