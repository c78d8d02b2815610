use super::{eval::Evaluator, num::Number, roller::Roller, RResult, RollError};
use crate::common::Operator;
use crate::error::TokenError;
use crate::tokenize::{Token, TokenValue};

/// The evaluator's view of a token: what it does at the start of an
/// expression, what it does after a complete left operand, and how tightly it
/// binds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Op {
    Literal(Number),
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Dice,
    LeftParen,
    RightParen,
    End,
}

impl Op {
    pub const SUM: u8 = 10;
    pub const PRODUCT: u8 = 20;
    pub const NEGATION: u8 = 25;
    pub const POWER: u8 = 30;
    pub const DICE: u8 = 100;

    /// Fails with the token's own message if the tokenizer rejected it.
    pub fn from_token(token: &Token) -> RResult<Self> {
        if let Some(error) = &token.error {
            return Err(RollError::Lex(error.message));
        }
        Ok(match &token.value {
            TokenValue::Number(x) => Self::Literal(*x),
            TokenValue::Operator(op) => match op {
                Operator::Add => Self::Add,
                Operator::Sub => Self::Sub,
                Operator::Mul => Self::Mul,
                Operator::Div => Self::Div,
                Operator::Pow => Self::Pow,
                Operator::Dice(_) => Self::Dice,
                Operator::LeftParen => Self::LeftParen,
                Operator::RightParen => Self::RightParen,
            },
            TokenValue::Text(_) => return Err(RollError::Unknown),
        })
    }

    /// `None` for tokens that can never follow a complete operand.
    pub fn left_binding_power(self) -> Option<u8> {
        match self {
            Self::Literal(_) => None,
            Self::Add | Self::Sub => Some(Self::SUM),
            // `(` after an operand is implicit multiplication.
            Self::Mul | Self::Div | Self::LeftParen => Some(Self::PRODUCT),
            Self::Pow => Some(Self::POWER),
            Self::Dice => Some(Self::DICE),
            Self::RightParen | Self::End => Some(0),
        }
    }

    /// Evaluates the token as the start of an expression. The cursor has
    /// already moved past it; `index` is its position in the token sequence.
    pub fn as_prefix<R: Roller>(self, ev: &mut Evaluator<'_, '_, R>, index: usize) -> RResult<Number> {
        let value = match self {
            Self::Literal(x) => Ok(x),
            Self::Sub => Ok(-ev.expression(Self::NEGATION)?),
            Self::LeftParen => {
                let value = ev.expression(0)?;
                ev.consume_closing_paren(index)?;
                Ok(value)
            }
            Self::Dice => {
                let sides = ev.expression(Self::DICE)?;
                ev.roll(index, Number::Int(1), sides)
            }
            Self::Add | Self::Mul | Self::Div | Self::Pow | Self::RightParen | Self::End => {
                Err(ev.unexpected_value())
            }
        };
        value.and_then(finite)
    }

    /// Evaluates the token as a continuation of `left`.
    pub fn as_infix<R: Roller>(
        self,
        ev: &mut Evaluator<'_, '_, R>,
        index: usize,
        left: Number,
    ) -> RResult<Number> {
        let value = match self {
            Self::Add => Ok(left + ev.expression(Self::SUM)?),
            Self::Sub => Ok(left - ev.expression(Self::SUM)?),
            Self::Mul => Ok(left * ev.expression(Self::PRODUCT)?),
            Self::Div => {
                let right = ev.expression(Self::PRODUCT)?;
                if right.is_zero() {
                    ev.annotate(index, TokenError::ZERO_DIVISION);
                    Err(RollError::ZeroDivision)
                } else {
                    Ok(left / right)
                }
            }
            // Right associative: the exponent absorbs further `^`.
            Self::Pow => Ok(left.pow(ev.expression(Self::POWER - 1)?)),
            Self::Dice => {
                let sides = ev.expression(Self::DICE)?;
                ev.roll(index, left, sides)
            }
            Self::LeftParen => {
                let inner = ev.expression(0)?;
                ev.consume_closing_paren(index)?;
                // The group binds like a factor, so `3(4 + 5)^2` squares the group only.
                let right = ev.continue_expression(inner, Self::PRODUCT)?;
                Ok(left * right)
            }
            Self::Literal(_) | Self::RightParen | Self::End => Err(RollError::Unknown),
        };
        value.and_then(finite)
    }
}

/// NaN and infinities end the evaluation at the operator that produced them.
fn finite(x: Number) -> RResult<Number> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(RollError::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Float, Int};
    use crate::roll::{DefaultRoller, RollContext};
    use crate::tokenize::tokenize;

    #[test]
    fn test_binding_powers() {
        assert_eq!(Op::Literal(Number::ZERO).left_binding_power(), None);
        assert_eq!(Op::Add.left_binding_power(), Op::Sub.left_binding_power());
        assert_eq!(Op::Mul.left_binding_power(), Op::LeftParen.left_binding_power());
        assert!(Op::SUM < Op::PRODUCT);
        assert!(Op::PRODUCT < Op::NEGATION);
        assert!(Op::NEGATION < Op::POWER);
        assert!(Op::POWER < Op::DICE);
        assert_eq!(Op::RightParen.left_binding_power(), Some(0));
        assert_eq!(Op::End.left_binding_power(), Some(0));
    }

    #[test]
    fn test_from_token() {
        let tokens = tokenize("2 * ( d x").tokens;
        let ops: Vec<_> = tokens.iter().map(Op::from_token).collect();
        assert_eq!(ops[0], Ok(Op::Literal(Number::Int(2))));
        assert_eq!(ops[1], Ok(Op::Mul));
        assert_eq!(ops[2], Ok(Op::LeftParen));
        assert_eq!(ops[3], Ok(Op::Dice));
        assert_eq!(ops[4], Err(RollError::Lex("Unrecognized characters")));
    }

    #[test]
    fn test_infix_without_capability_is_internal_error() {
        let mut ctx = RollContext::<DefaultRoller>::default();
        let mut tokens = tokenize("1").tokens;
        let mut ev = Evaluator::new(&mut ctx, &mut tokens);
        let res = Op::End.as_infix(&mut ev, 0, Number::Int(1));
        assert_eq!(res, Err(RollError::Unknown));
    }

    #[test]
    fn test_finite() {
        assert_eq!(finite(Number::Float(Float::INFINITY)), Err(RollError::Unknown));
        assert_eq!(finite(Number::Float(Float::NAN)), Err(RollError::Unknown));
        assert_eq!(finite(Number::Float(0.5)), Ok(Number::Float(0.5)));
        assert_eq!(finite(Number::Int(Int::MAX)), Ok(Number::Int(Int::MAX)));
    }
}
