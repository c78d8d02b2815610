use std::fmt;

/// Classifies an error attached to a token.
///
/// `BadNum` and `BadChars` are produced by the tokenizer; the others are
/// written by the evaluator when it aborts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    BadNum,
    BadChars,
    BadOp,
    TooManyRolls,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadNum => "badNum",
            Self::BadChars => "badChars",
            Self::BadOp => "badOp",
            Self::TooManyRolls => "tooManyRolls",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A positional diagnostic: what went wrong at the token it is attached to.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TokenError {
    pub kind: ErrorKind,
    pub message: &'static str,
}

impl TokenError {
    pub const BAD_NUM: Self = Self::new(ErrorKind::BadNum, "Unrecognized number");
    pub const BAD_CHARS: Self = Self::new(ErrorKind::BadChars, "Unrecognized characters");
    pub const MISSING_PAREN: Self = Self::new(ErrorKind::BadOp, "Missing )");
    pub const UNEXPECTED_VALUE: Self = Self::new(ErrorKind::BadOp, "Unexpected value");
    pub const ZERO_DIVISION: Self = Self::new(ErrorKind::BadOp, "Cannot divide by zero.");
    pub const TOO_MANY_ROLLS: Self = Self::new(ErrorKind::TooManyRolls, "Too many dice rolled.");

    pub const fn new(kind: ErrorKind, message: &'static str) -> Self {
        Self { kind, message }
    }
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_names() {
        assert_eq!(ErrorKind::BadNum.to_string(), "badNum");
        assert_eq!(ErrorKind::TooManyRolls.to_string(), "tooManyRolls");
        assert_eq!(ErrorKind::BadChars.as_str(), "badChars");
    }

    #[test]
    fn test_token_error_display() {
        assert_eq!(TokenError::MISSING_PAREN.to_string(), "badOp: Missing )");
        assert_eq!(TokenError::BAD_NUM.kind, ErrorKind::BadNum);
    }
}
