use crate::common::Operator;
use logos::Logos;

pub(crate) type Lexer<'a> = logos::Lexer<'a, Lexeme>;

pub(crate) fn lexer(s: &str) -> Lexer {
    Lexeme::lexer(s)
}

/// Raw lexical classes. Every character of the input belongs to exactly one
/// of them, so `Error` is only a fallback.
#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Lexeme {
    // After the first `.` both digits and dots are swallowed, so `.6.3` is one
    // malformed number rather than `.6` followed by `.3`.
    #[regex(r"[0-9.][0-9]*(\.[0-9.]*)?")]
    Number,

    #[regex(r"[+\-*/\^()dD]", |lex| lex.slice().chars().next().and_then(Operator::from_char))]
    Operator(Operator),

    #[regex(r"[^\x00-\x20.0-9+\-*/\^()dD]+")]
    Unrecognized,

    #[regex(r"[\x00-\x20]+", logos::skip)]
    #[error]
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(s: &str) -> Vec<(Lexeme, &str)> {
        let mut lexer = lexer(s);
        let mut ret = Vec::new();
        while let Some(lexeme) = lexer.next() {
            ret.push((lexeme, lexer.slice()));
        }
        ret
    }

    #[test]
    fn test_lex_numbers() {
        assert_eq!(lex("32"), vec![(Lexeme::Number, "32")]);
        assert_eq!(lex("3.25"), vec![(Lexeme::Number, "3.25")]);
        assert_eq!(lex(".5"), vec![(Lexeme::Number, ".5")]);
        assert_eq!(lex("5."), vec![(Lexeme::Number, "5.")]);
        assert_eq!(lex("1.2.3"), vec![(Lexeme::Number, "1.2.3")]);
    }

    #[test]
    fn test_lex_greedy_decimal_run() {
        assert_eq!(
            lex("5.2+.6.3"),
            vec![
                (Lexeme::Number, "5.2"),
                (Lexeme::Operator(Operator::Add), "+"),
                (Lexeme::Number, ".6.3"),
            ]
        );
    }

    #[test]
    fn test_lex_operators_and_whitespace() {
        assert_eq!(
            lex(" 3d6\t+ D4 "),
            vec![
                (Lexeme::Number, "3"),
                (Lexeme::Operator(Operator::Dice('d')), "d"),
                (Lexeme::Number, "6"),
                (Lexeme::Operator(Operator::Add), "+"),
                (Lexeme::Operator(Operator::Dice('D')), "D"),
                (Lexeme::Number, "4"),
            ]
        );
    }

    #[test]
    fn test_lex_unrecognized_runs() {
        assert_eq!(
            lex("2 + abc!d4"),
            vec![
                (Lexeme::Number, "2"),
                (Lexeme::Operator(Operator::Add), "+"),
                (Lexeme::Unrecognized, "abc!"),
                (Lexeme::Operator(Operator::Dice('d')), "d"),
                (Lexeme::Number, "4"),
            ]
        );
        assert_eq!(
            lex("x y"),
            vec![(Lexeme::Unrecognized, "x"), (Lexeme::Unrecognized, "y")]
        );
    }
}
