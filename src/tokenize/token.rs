use crate::common::Operator;
use crate::error::{ErrorKind, TokenError};
use crate::roll::{Number, RollRecord};
use std::fmt;
use std::ops::Range;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    Number,
    Operator,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Number(Number),
    Operator(Operator),
    /// The raw source of a token the tokenizer could not classify.
    Text(String),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(x) => fmt::Display::fmt(x, f),
            Self::Operator(op) => fmt::Display::fmt(op, f),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One lexical unit of an expression.
///
/// Tokens are annotated in place while the expression is evaluated, so the
/// caller can map errors and dice rolls back onto the source via `span`.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    /// Byte range of the token in the original text.
    pub span: Range<usize>,
    pub error: Option<TokenError>,
    /// The roll made by this dice operator.
    pub roll: Option<RollRecord>,
    /// The roll of the dice operator whose operand ended at this token, e.g.
    /// the `)` in `6d(3d4 + 3)`.
    pub roll_result: Option<RollRecord>,
}

impl Token {
    fn new(kind: TokenKind, value: TokenValue, span: Range<usize>) -> Self {
        Self {
            kind,
            value,
            span,
            error: None,
            roll: None,
            roll_result: None,
        }
    }

    pub fn number(value: Number, span: Range<usize>) -> Self {
        Self::new(TokenKind::Number, TokenValue::Number(value), span)
    }

    pub fn operator(op: Operator, span: Range<usize>) -> Self {
        Self::new(TokenKind::Operator, TokenValue::Operator(op), span)
    }

    /// A token the tokenizer rejected. It keeps the `Number` kind and its raw text.
    pub fn invalid(text: impl Into<String>, error: TokenError, span: Range<usize>) -> Self {
        let mut ret = Self::new(TokenKind::Number, TokenValue::Text(text.into()), span);
        ret.error = Some(error);
        ret
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(|e| e.kind)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(|e| e.message)
    }

    /// Attaches an error unless one is already present.
    pub(crate) fn annotate(&mut self, error: TokenError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

/// The tokens of one input string.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizeResult {
    pub tokens: Vec<Token>,
    pub original_text: String,
    /// Set for empty input and whenever any token failed to tokenize.
    pub has_error: bool,
}
