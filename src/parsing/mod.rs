
//! Turning expression text into postfix token sequences.

pub mod operator;
pub mod shunting_yard;
pub mod source;
pub mod token;
pub mod tokenizer;

pub use token::{Token, postfix_to_string};
