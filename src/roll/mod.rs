mod ctx;
mod cursor;
mod error;
mod eval;
mod num;
mod op;
mod record;
mod roller;

use crate::tokenize::TokenizeResult;

type RResult<T> = Result<T, RollError>;

pub use ctx::{DefaultRoller, RollContext, DEFAULT_MAX_ROLLS};
pub use error::RollError;
pub use num::Number;
pub use record::{EvalResult, RollRecord};
pub use roller::Roller;

/// Evaluates tokens with the default context: thread-local randomness and a
/// ceiling of 1000 dice.
pub fn eval(tokenized: TokenizeResult) -> EvalResult {
    RollContext::<DefaultRoller>::default().eval(tokenized)
}
