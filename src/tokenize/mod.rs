mod lexer;
mod token;

use crate::common::{Float, Int};
use crate::error::TokenError;
use crate::roll::Number;
use lexer::Lexeme;

pub use token::{Token, TokenKind, TokenValue, TokenizeResult};

/// Splits an expression into tokens.
///
/// Never fails: characters that cannot be classified become tokens carrying
/// an error, and scanning continues past them.
pub fn tokenize(text: &str) -> TokenizeResult {
    if text.is_empty() {
        return TokenizeResult {
            tokens: Vec::new(),
            original_text: String::new(),
            has_error: true,
        };
    }

    let mut lexer = lexer::lexer(text);
    let mut tokens = Vec::new();
    while let Some(lexeme) = lexer.next() {
        let slice = lexer.slice();
        let span = lexer.span();
        let token = match lexeme {
            Lexeme::Number => parse_number(slice).map_or_else(
                || Token::invalid(slice, TokenError::BAD_NUM, span.clone()),
                |x| Token::number(x, span.clone()),
            ),
            Lexeme::Operator(op) => Token::operator(op, span),
            Lexeme::Unrecognized | Lexeme::Error => {
                Token::invalid(slice, TokenError::BAD_CHARS, span)
            }
        };
        tokens.push(token);
    }

    let has_error = tokens.iter().any(Token::has_error);
    if has_error {
        log::debug!("tokenizing {:?} produced lexical errors", text);
    }
    TokenizeResult {
        tokens,
        original_text: text.to_owned(),
        has_error,
    }
}

fn parse_number(s: &str) -> Option<Number> {
    s.parse::<Int>()
        .map(Number::Int)
        .or_else(|_| s.parse::<Float>().map(Number::Float))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::common::Operator;

    fn values(s: &str) -> Vec<String> {
        tokenize(s)
            .tokens
            .iter()
            .map(|t| t.value.to_string())
            .collect()
    }

    #[test]
    fn test_tokenize_empty() {
        let result = tokenize("");
        assert!(result.tokens.is_empty());
        assert!(result.has_error);
        assert_eq!(result.original_text, "");
    }

    #[test]
    fn test_tokenize_whitespace_only() {
        let result = tokenize(" \t\n");
        assert!(result.tokens.is_empty());
        assert!(!result.has_error);
    }

    #[test]
    fn test_tokenize_expression() {
        let result = tokenize("3d6 + 2");
        assert!(!result.has_error);
        assert_eq!(result.original_text, "3d6 + 2");
        assert_eq!(values("3d6 + 2"), vec!["3", "d", "6", "+", "2"]);
        let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Number,
                TokenKind::Operator,
                TokenKind::Number,
                TokenKind::Operator,
                TokenKind::Number,
            ]
        );
        assert_eq!(result.tokens[4].span, 6..7);
    }

    #[test]
    fn test_tokenize_numbers() {
        let result = tokenize("12 .5 5. 99999999999999999999");
        let nums: Vec<_> = result
            .tokens
            .iter()
            .map(|t| match t.value {
                TokenValue::Number(x) => x,
                _ => panic!("expected a number, found {:?}", t),
            })
            .collect();
        assert!(matches!(nums[0], Number::Int(12)));
        assert!(matches!(nums[1], Number::Float(x) if x == 0.5));
        assert!(matches!(nums[2], Number::Float(x) if x == 5.0));
        assert!(matches!(nums[3], Number::Float(_)));
    }

    #[test]
    fn test_tokenize_bad_number() {
        let result = tokenize("5.2+.6.3");
        assert!(result.has_error);
        assert_eq!(result.tokens.len(), 3);
        let bad = &result.tokens[2];
        assert_eq!(bad.kind, TokenKind::Number);
        assert_eq!(bad.value, TokenValue::Text(".6.3".into()));
        assert_eq!(bad.error_kind(), Some(ErrorKind::BadNum));
        assert_eq!(bad.error_message(), Some("Unrecognized number"));

        assert_eq!(tokenize(".").tokens[0].error_kind(), Some(ErrorKind::BadNum));
    }

    #[test]
    fn test_tokenize_bad_chars_keeps_scanning() {
        let result = tokenize("2 + foo * 3");
        assert!(result.has_error);
        assert_eq!(values("2 + foo * 3"), vec!["2", "+", "foo", "*", "3"]);
        let bad = &result.tokens[2];
        assert_eq!(bad.kind, TokenKind::Number);
        assert_eq!(bad.error_kind(), Some(ErrorKind::BadChars));
        assert_eq!(bad.error_message(), Some("Unrecognized characters"));
        assert!(!result.tokens[4].has_error());
    }

    #[test]
    fn test_tokenize_dice_case_insensitive() {
        assert_eq!(values("2D8+d4"), vec!["2", "D", "8", "+", "d", "4"]);
        let tokens = tokenize("D").tokens;
        assert_eq!(tokens[0].value, TokenValue::Operator(Operator::Dice('D')));
    }
}
