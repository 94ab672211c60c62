
use super::{Operator, OperatorInfo};
use super::precedence::Precedence;
use super::associativity::Associativity;

use phf::phf_map;

/// Metadata for every operator, indexed by the operator's
/// discriminant. The order here must match the declaration order of
/// [`Operator`].
pub(super) static OPERATOR_INFO: [OperatorInfo; Operator::COUNT] = [
  OperatorInfo::new(Operator::Plus, '+', Associativity::LEFT, Precedence::ADDITIVE),
  OperatorInfo::new(Operator::Minus, '-', Associativity::LEFT, Precedence::ADDITIVE),
  OperatorInfo::new(Operator::Times, '*', Associativity::LEFT, Precedence::MULTIPLICATIVE),
  OperatorInfo::new(Operator::Divide, '/', Associativity::LEFT, Precedence::MULTIPLICATIVE),
  OperatorInfo::new(Operator::Power, '^', Associativity::RIGHT, Precedence::EXPONENTIAL),
];

/// Operators indexed by the character that spells them.
pub(super) static BY_SYMBOL: phf::Map<char, Operator> = phf_map! {
  '+' => Operator::Plus,
  '-' => Operator::Minus,
  '*' => Operator::Times,
  '/' => Operator::Divide,
  '^' => Operator::Power,
};
