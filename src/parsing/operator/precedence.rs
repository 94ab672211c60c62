
/// The precedence of an operator. Higher values bind tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(u8);

impl Precedence {
  pub const ADDITIVE: Precedence = Precedence(2);
  pub const MULTIPLICATIVE: Precedence = Precedence(3);
  pub const EXPONENTIAL: Precedence = Precedence(4);

  pub const fn new(n: u8) -> Precedence {
    Precedence(n)
  }
}
