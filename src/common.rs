use std::fmt::{self, Write};
use std::num::NonZeroU64;

pub type Int = i64;
pub type UInt = u64;
pub type NonZeroUInt = NonZeroU64;

pub type Float = f64;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// The operators recognized by the tokenizer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    /// `d` or `D`; the original casing is kept so tokens echo their source.
    Dice(char),
    LeftParen,
    RightParen,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '+' => Self::Add,
            '-' => Self::Sub,
            '*' => Self::Mul,
            '/' => Self::Div,
            '^' => Self::Pow,
            'd' | 'D' => Self::Dice(c),
            '(' => Self::LeftParen,
            ')' => Self::RightParen,
            _ => return None,
        })
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
            Self::Dice(c) => c,
            Self::LeftParen => '(',
            Self::RightParen => ')',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_chars() {
        for c in "+-*/^dD()".chars() {
            assert_eq!(Operator::from_char(c).map(Operator::as_char), Some(c));
        }
        assert_eq!(Operator::from_char('%'), None);
        assert_eq!(Operator::from_char('x'), None);
    }
}
