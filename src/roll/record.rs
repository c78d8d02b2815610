use super::{num::Number, RResult};
use crate::common::{Int, NonEmpty};
use crate::tokenize::Token;
use std::fmt;

/// One evaluation of a dice operator.
#[derive(Debug, Clone, PartialEq)]
pub struct RollRecord {
    /// The sides operand as evaluated, before integer coercion.
    pub sides: Number,
    pub rolls: NonEmpty<Int>,
    pub sum: Number,
}

impl RollRecord {
    pub fn new(sides: Number, rolls: NonEmpty<Int>) -> Self {
        let sum = rolls.iter().copied().map(Number::Int).sum();
        Self { sides, rolls, sum }
    }
}

impl fmt::Display for RollRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rolls = self
            .rolls
            .iter()
            .map(Int::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}d{} ({}) = {}", self.rolls.len(), self.sides, rolls, self.sum)
    }
}

/// Everything known about one evaluated expression.
///
/// On failure `value` is zero, `error_code` holds the reason, and `rolls`
/// still lists the dice rolled before the failure.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalResult {
    pub error: bool,
    pub error_code: String,
    pub value: Number,
    pub original_text: String,
    pub rolls: Vec<RollRecord>,
    pub tokens: Vec<Token>,
}

impl EvalResult {
    pub(crate) fn new(
        outcome: RResult<Number>,
        original_text: String,
        rolls: Vec<RollRecord>,
        tokens: Vec<Token>,
    ) -> Self {
        let (error, error_code, value) = match outcome {
            Ok(value) => (false, String::new(), value),
            Err(why) => (true, why.to_string(), Number::ZERO),
        };
        Self {
            error,
            error_code,
            value,
            original_text,
            rolls,
            tokens,
        }
    }

    pub fn is_ok(&self) -> bool {
        !self.error
    }

    /// The value, or the error code on failure.
    pub fn result(&self) -> Result<Number, &str> {
        if self.error {
            Err(self.error_code.as_str())
        } else {
            Ok(self.value)
        }
    }

    /// Tokens carrying an error, with their positions in the sequence.
    pub fn error_tokens(&self) -> impl Iterator<Item = (usize, &Token)> + '_ {
        self.tokens.iter().enumerate().filter(|(_, t)| t.has_error())
    }
}
