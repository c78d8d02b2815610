use super::{eval::Evaluator, num::Number, roller::Roller, EvalResult, RResult, RollError};
use crate::common::*;
use crate::tokenize::{tokenize, TokenizeResult};
use vec1::vec1;

pub type DefaultRoller = rand::prelude::ThreadRng;

/// How many dice one evaluation may roll unless configured otherwise.
pub const DEFAULT_MAX_ROLLS: usize = 1000;

/// Evaluation settings plus the random source dice are rolled with.
pub struct RollContext<R = DefaultRoller> {
    max_rolls: Option<usize>,
    rolls: usize,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(max_rolls: Option<usize>, roller: R) -> Self {
        Self {
            max_rolls,
            rolls: 0,
            roller,
        }
    }

    pub fn new_bounded(max_rolls: usize, roller: R) -> Self {
        Self::new(Some(max_rolls), roller)
    }

    pub fn new_unbounded(roller: R) -> Self {
        Self::new(None, roller)
    }

    pub fn max_rolls(&self) -> Option<usize> {
        self.max_rolls
    }

    fn count_rolls(&mut self, n: usize) -> RResult<()> {
        self.rolls = self.rolls.saturating_add(n);
        if self.max_rolls.map_or(false, |max| self.rolls > max) {
            Err(RollError::TooManyRolls)
        } else {
            Ok(())
        }
    }

    /// Rolls `quantity` dice with `sides` faces each.
    ///
    /// Both operands are truncated to integers; values with no integer meaning
    /// count as zero. A non-positive quantity yields a single 0, and
    /// non-positive sides yield a 0 per die.
    pub fn roll_dice(&mut self, quantity: Number, sides: Number) -> RResult<NonEmpty<Int>> {
        let num = quantity.to_int().unwrap_or(0);
        if num <= 0 {
            self.count_rolls(1)?;
            return Ok(vec1![0]);
        }

        let count = usize::try_from(num).unwrap_or(usize::MAX);
        self.count_rolls(count)?;

        let sides = sides.to_int().unwrap_or(0);
        let rolls = match UInt::try_from(sides).ok().and_then(NonZeroUInt::new) {
            Some(sides) => self.roller.roll(count, sides),
            None => vec![0; count],
        };
        NonEmpty::try_from_vec(rolls).map_err(|_| RollError::Unknown)
    }

    /// Evaluates a tokenized expression. The roll ceiling applies to this
    /// evaluation alone.
    pub fn eval(&mut self, mut tokenized: TokenizeResult) -> EvalResult {
        self.rolls = 0;
        let mut evaluator = Evaluator::new(self, &mut tokenized.tokens);
        let outcome = evaluator.run();
        let rolls = evaluator.into_rolls();

        match &outcome {
            Ok(value) => log::debug!("{:?} = {}", tokenized.original_text, value),
            Err(RollError::Unknown) => log::warn!(
                "unanticipated failure evaluating {:?}",
                tokenized.original_text
            ),
            Err(why) => log::debug!("{:?} failed: {}", tokenized.original_text, why),
        }
        EvalResult::new(outcome, tokenized.original_text, rolls, tokenized.tokens)
    }

    pub fn eval_str(&mut self, text: &str) -> EvalResult {
        self.eval(tokenize(text))
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_ROLLS), rand::thread_rng())
    }
}
