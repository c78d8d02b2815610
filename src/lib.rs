//! Arithmetic with dice.
//!
//! ```
//! let result = dicecalc::evaluate_expression("3d6 + 2");
//! assert!(!result.error);
//! assert_eq!(result.rolls.len(), 1);
//! assert_eq!(result.rolls[0].rolls.len(), 3);
//! ```

mod common;
pub mod error;
pub mod roll;
pub mod tokenize;

pub use common::{Float, Int, Operator};
pub use error::{ErrorKind, TokenError};
pub use roll::{EvalResult, Number, RollContext, RollError, RollRecord, Roller, DEFAULT_MAX_ROLLS};
pub use tokenize::{tokenize, Token, TokenKind, TokenValue, TokenizeResult};

/// Evaluates a tokenized expression with the default [`RollContext`].
pub fn evaluate(tokenized: TokenizeResult) -> EvalResult {
    roll::eval(tokenized)
}

/// Tokenizes and evaluates `text`.
///
/// Failures are reported through [`EvalResult::error`] and
/// [`EvalResult::error_code`]; this function never panics on bad input.
pub fn evaluate_expression(text: &str) -> EvalResult {
    evaluate(tokenize(text))
}
