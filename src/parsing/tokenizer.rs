
//! Splitting raw expression text into [`Token`]s.

use super::operator::Operator;
use super::source::SourceOffset;
use super::token::Token;
use crate::error::CalcError;

use regex::Regex;
use once_cell::sync::Lazy;
use log::trace;

/// A run of digits and decimal points. Malformed runs such as `1.2.3`
/// are deliberately accepted here and rejected when the literal is
/// parsed.
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9.]+").unwrap());

/// Cursor over the expression being tokenized.
#[derive(Debug, Clone)]
pub struct TokenizerState<'a> {
  input: &'a str,
  position: SourceOffset,
}

#[derive(Debug, Clone)]
pub struct TokenizerMatch<'a> {
  matched_str: &'a str,
  start: SourceOffset,
  end: SourceOffset,
}

impl<'a> TokenizerState<'a> {
  pub fn new(input: &'a str) -> Self {
    Self {
      input,
      position: SourceOffset(0),
    }
  }

  pub fn is_eof(&self) -> bool {
    self.input.is_empty()
  }

  pub fn peek(&self) -> Option<char> {
    self.input.chars().next()
  }

  pub fn current_pos(&self) -> SourceOffset {
    self.position
  }

  /// Advances the position of `self` by `amount` bytes, returning the
  /// skipped portion. Never advances beyond one-past-the-end of the
  /// input.
  pub fn advance(&mut self, mut amount: usize) -> TokenizerMatch<'a> {
    amount = amount.min(self.input.len());

    let match_pos = self.current_pos();
    let (prefix, suffix) = self.input.split_at(amount);
    self.position += amount;
    self.input = suffix;
    TokenizerMatch {
      matched_str: prefix,
      start: match_pos,
      end: match_pos + amount,
    }
  }

  /// If the current position of the string matches the given regex,
  /// returns the matched string and advances the tokenizer state. If
  /// not, returns `None`.
  ///
  /// The regex MUST be anchored at the start of the input. This
  /// function may panic if that precondition is not satisfied.
  pub fn read_regex(&mut self, regex: &Regex) -> Option<TokenizerMatch<'a>> {
    let m = regex.find(self.input)?;
    assert_eq!(m.start(), 0, "Regex must be anchored at the start of the input");

    Some(self.advance(m.len()))
  }
}

impl<'a> TokenizerMatch<'a> {
  pub fn as_str(&self) -> &'a str {
    self.matched_str
  }
  pub fn start(&self) -> SourceOffset {
    self.start
  }
  pub fn end(&self) -> SourceOffset {
    self.end
  }
}

/// Splits `expr` into tokens. Digits and decimal points accumulate
/// into numeric literals; each operator and parenthesis is a token of
/// its own. Any other character, whitespace included, is an error.
pub fn tokenize(expr: &str) -> Result<Vec<Token>, CalcError> {
  let mut state = TokenizerState::new(expr);
  let mut tokens = Vec::new();
  while let Some(ch) = state.peek() {
    if let Some(m) = state.read_regex(&NUMBER_RE) {
      trace!("literal {:?} at {}", m.as_str(), m.start());
      tokens.push(Token::literal(m.as_str()));
      continue;
    }
    let position = state.current_pos();
    let token = match ch {
      '(' => Token::LeftParen,
      ')' => Token::RightParen,
      _ => {
        let op = Operator::from_char(ch).map_err(|_| CalcError::foreign_character(ch, position))?;
        Token::Operator(op)
      }
    };
    trace!("token {} at {}", token, position);
    state.advance(ch.len_utf8());
    tokens.push(token);
  }
  Ok(tokens)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::BadOperand;

  fn lit(s: &str) -> Token {
    Token::literal(s)
  }

  fn op(c: char) -> Token {
    Token::Operator(Operator::from_char(c).unwrap())
  }

  #[test]
  fn test_advance_positions() {
    let mut state = TokenizerState::new("abcdefg");

    let m = state.advance(3);
    assert_eq!(m.as_str(), "abc");
    assert_eq!(m.start(), SourceOffset(0));
    assert_eq!(m.end(), SourceOffset(3));

    let m = state.advance(99);
    assert_eq!(m.as_str(), "defg");
    assert_eq!(m.start(), SourceOffset(3));
    assert_eq!(m.end(), SourceOffset(7));
    assert!(state.is_eof());
    assert_eq!(state.peek(), None);
  }

  #[test]
  fn test_read_regex() {
    let mut state = TokenizerState::new("12.5+3");
    let m = state.read_regex(&NUMBER_RE).unwrap();
    assert_eq!(m.as_str(), "12.5");
    assert_eq!(state.current_pos(), SourceOffset(4));
    assert!(state.read_regex(&NUMBER_RE).is_none());
    assert_eq!(state.current_pos(), SourceOffset(4));
  }

  #[test]
  fn test_tokenize_empty() {
    assert_eq!(tokenize("").unwrap(), Vec::<Token>::new());
  }

  #[test]
  fn test_tokenize_single_number() {
    assert_eq!(tokenize("42").unwrap(), vec![lit("42")]);
    assert_eq!(tokenize("3.25").unwrap(), vec![lit("3.25")]);
  }

  #[test]
  fn test_tokenize_expression() {
    assert_eq!(
      tokenize("2*(3+4)^5").unwrap(),
      vec![
        lit("2"), op('*'), Token::LeftParen, lit("3"), op('+'), lit("4"),
        Token::RightParen, op('^'), lit("5"),
      ],
    );
  }

  #[test]
  fn test_tokenize_every_operator() {
    assert_eq!(
      tokenize("1+2-3*4/5^6").unwrap(),
      vec![
        lit("1"), op('+'), lit("2"), op('-'), lit("3"), op('*'),
        lit("4"), op('/'), lit("5"), op('^'), lit("6"),
      ],
    );
  }

  #[test]
  fn test_tokenize_adjacent_parens() {
    assert_eq!(
      tokenize("((1))").unwrap(),
      vec![Token::LeftParen, Token::LeftParen, lit("1"), Token::RightParen, Token::RightParen],
    );
  }

  #[test]
  fn test_tokenize_keeps_malformed_literals() {
    assert_eq!(tokenize("1.2.3+.").unwrap(), vec![lit("1.2.3"), op('+'), lit(".")]);
  }

  #[test]
  fn test_tokenize_foreign_character() {
    assert_eq!(
      tokenize("2+a").unwrap_err(),
      CalcError::MissingOperand(BadOperand::ForeignCharacter { found: 'a', position: SourceOffset(2) }),
    );
  }

  #[test]
  fn test_tokenize_rejects_whitespace() {
    let err = tokenize("2 + 3").unwrap_err();
    assert_eq!(err, CalcError::foreign_character(' ', SourceOffset(1)));
  }

  #[test]
  fn test_tokenize_rejects_other_operators() {
    assert!(tokenize("7%2").unwrap_err().is_missing_operand());
    assert!(tokenize("1,5").unwrap_err().is_missing_operand());
  }

  #[test]
  fn test_tokenize_multibyte_position() {
    let err = tokenize("1+\u{00e9}").unwrap_err();
    assert_eq!(err, CalcError::foreign_character('\u{00e9}', SourceOffset(2)));
  }
}
