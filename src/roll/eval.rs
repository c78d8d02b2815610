use super::{
    cursor::Cursor, num::Number, op::Op, roller::Roller, RResult, RollContext, RollError,
    RollRecord,
};
use crate::error::TokenError;
use crate::tokenize::Token;

/// Precedence-climbing evaluation of one token sequence.
pub(crate) struct Evaluator<'c, 't, R> {
    ctx: &'c mut RollContext<R>,
    cursor: Cursor<'t>,
    rolls: Vec<RollRecord>,
    depth: usize,
}

impl<'c, 't, R: Roller> Evaluator<'c, 't, R> {
    /// Deeper nesting than this is reported instead of exhausting the stack.
    const MAX_DEPTH: usize = 256;

    pub fn new(ctx: &'c mut RollContext<R>, tokens: &'t mut [Token]) -> Self {
        Self {
            ctx,
            cursor: Cursor::new(tokens),
            rolls: Vec::new(),
            depth: 0,
        }
    }

    /// Evaluates the whole sequence and normalizes the result.
    ///
    /// Anything after a top-level `)` is left unread, so `2 + 2)` is 4.
    pub fn run(&mut self) -> RResult<Number> {
        self.cursor.advance()?;
        Ok(self.expression(0)?.normalize())
    }

    pub fn into_rolls(self) -> Vec<RollRecord> {
        self.rolls
    }

    /// Evaluates the expression starting at the current token, stopping before
    /// the first token that binds no tighter than `right_binding_power`.
    pub fn expression(&mut self, right_binding_power: u8) -> RResult<Number> {
        if self.depth >= Self::MAX_DEPTH {
            return Err(RollError::Unknown);
        }
        self.depth += 1;
        let ret = self.prefix_then_infix(right_binding_power);
        self.depth -= 1;
        ret
    }

    fn prefix_then_infix(&mut self, right_binding_power: u8) -> RResult<Number> {
        let (op, index) = (self.cursor.current(), self.cursor.index());
        self.cursor.advance()?;
        let left = op.as_prefix(self, index)?;
        self.continue_expression(left, right_binding_power)
    }

    /// Folds infix operators into an already evaluated `left`.
    pub fn continue_expression(&mut self, mut left: Number, right_binding_power: u8) -> RResult<Number> {
        loop {
            let op = self.cursor.current();
            let left_binding_power = op
                .left_binding_power()
                .ok_or_else(|| self.unexpected_value())?;
            if left_binding_power <= right_binding_power {
                return Ok(left);
            }
            let index = self.cursor.index();
            self.cursor.advance()?;
            left = op.as_infix(self, index, left)?;
        }
    }

    /// Moves past the `)` closing the group opened at `open`. A missing `)` is
    /// blamed on the opening token.
    pub fn consume_closing_paren(&mut self, open: usize) -> RResult<()> {
        if self.cursor.current() != Op::RightParen {
            self.cursor.annotate(open, TokenError::MISSING_PAREN);
            return Err(RollError::ExpectedClosingParen);
        }
        self.cursor.advance()
    }

    pub fn unexpected_value(&mut self) -> RollError {
        self.cursor.annotate_last(TokenError::UNEXPECTED_VALUE);
        RollError::UnexpectedValue
    }

    pub fn annotate(&mut self, index: usize, error: TokenError) {
        self.cursor.annotate(index, error);
    }

    /// Rolls `quantity` dice of `sides` for the dice operator at `index` and
    /// returns their sum.
    pub fn roll(&mut self, index: usize, quantity: Number, sides: Number) -> RResult<Number> {
        let rolls = match self.ctx.roll_dice(quantity, sides) {
            Ok(rolls) => rolls,
            Err(why) => {
                if why == RollError::TooManyRolls {
                    self.cursor.annotate(index, TokenError::TOO_MANY_ROLLS);
                }
                return Err(why);
            }
        };
        let record = RollRecord::new(sides, rolls);
        log::trace!("rolled {}d{}: {:?}", quantity, sides, record.rolls);
        self.cursor.attach_roll(index, &record);
        let sum = record.sum;
        self.rolls.push(record);
        Ok(sum)
    }
}
