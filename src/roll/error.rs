use thiserror::Error;

/// Why an evaluation stopped. The `Display` text is what callers receive as
/// the result's error code.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum RollError {
    #[error("Unexpected value in expression")]
    UnexpectedValue,
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Expected )")]
    ExpectedClosingParen,
    #[error("Cannot divide by zero.")]
    ZeroDivision,
    #[error("Too many dice rolled.")]
    TooManyRolls,
    /// A token the tokenizer already flagged was reached.
    #[error("{0}")]
    Lex(&'static str),
    #[error("Unable to parse expression.")]
    Unknown,
}
