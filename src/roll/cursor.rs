use super::{op::Op, RResult, RollError, RollRecord};
use crate::error::TokenError;
use crate::tokenize::Token;

/// A single-pass, lookahead-one view over the token sequence.
///
/// The sequence itself is never reordered; the cursor only writes annotations
/// onto the tokens it has seen.
pub(crate) struct Cursor<'t> {
    tokens: &'t mut [Token],
    /// Position of `current`. `None` before the first advance; `tokens.len()`
    /// stands for the end of input.
    index: Option<usize>,
    current: Op,
    /// The token most recently moved past.
    last: Option<usize>,
}

impl<'t> Cursor<'t> {
    pub fn new(tokens: &'t mut [Token]) -> Self {
        Self {
            tokens,
            index: None,
            current: Op::End,
            last: None,
        }
    }

    pub fn current(&self) -> Op {
        self.current
    }

    pub fn index(&self) -> usize {
        self.index.unwrap_or_default()
    }

    pub fn last(&self) -> Option<usize> {
        self.last
    }

    /// Moves to the next token. Fails past the end of input, or when the next
    /// token was rejected by the tokenizer.
    pub fn advance(&mut self) -> RResult<()> {
        let next = match self.index {
            None => 0,
            Some(i) if i >= self.tokens.len() => return Err(RollError::UnexpectedEnd),
            Some(i) => {
                self.last = Some(i);
                i + 1
            }
        };
        self.index = Some(next);
        self.current = self.tokens.get(next).map_or(Ok(Op::End), Op::from_token)?;
        Ok(())
    }

    pub fn annotate(&mut self, index: usize, error: TokenError) {
        if let Some(token) = self.tokens.get_mut(index) {
            token.annotate(error);
        }
    }

    pub fn annotate_last(&mut self, error: TokenError) {
        if let Some(last) = self.last() {
            self.annotate(last, error);
        }
    }

    /// Records a roll on the dice operator at `index` and on the token that
    /// ended its operand.
    pub fn attach_roll(&mut self, index: usize, record: &RollRecord) {
        if let Some(token) = self.tokens.get_mut(index) {
            token.roll = Some(record.clone());
        }
        if let Some(token) = self.last().and_then(|i| self.tokens.get_mut(i)) {
            token.roll_result = Some(record.clone());
        }
    }
}
