
//! Last-in-first-out stacks, shared by the infix converter (for
//! operators) and the postfix evaluator (for operands).

mod error;
mod structure;

pub use error::StackError;
pub use structure::Stack;
