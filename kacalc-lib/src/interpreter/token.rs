use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression
#[derive(Clone, PartialEq)]
pub enum Token {
    Number(f64),
    /// A function or constant name. Which of the two is decided by the parser.
    Identifier(String),
    Plus,
    Dash,
    Asterisk,
    DoubleAsterisk,
    Caret,
    ForwardSlash,
    LeftParentheses,
    RightParentheses,
    End,
}

impl Token {
    /// Whether the token closes a value, e.g. `2` or `)` in `2 * (3)`.
    pub fn ends_value(&self) -> bool {
        matches!(self, Token::Number(_) | Token::RightParentheses)
    }

    /// Whether the token opens a value, e.g. `2`, `pi` or `(`.
    pub fn starts_value(&self) -> bool {
        matches!(
            self,
            Token::Number(_) | Token::Identifier(_) | Token::LeftParentheses
        )
    }

    pub fn as_binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            Token::Plus => Some(BinaryOperator::Add),
            Token::Dash => Some(BinaryOperator::Subtract),
            Token::Asterisk => Some(BinaryOperator::Multiply),
            Token::ForwardSlash => Some(BinaryOperator::Divide),
            Token::DoubleAsterisk | Token::Caret => Some(BinaryOperator::Exponentiate),
            _ => None,
        }
    }

    pub fn as_unary_operator(&self) -> Option<UnaryOperator> {
        match self {
            Token::Plus => Some(UnaryOperator::Plus),
            Token::Dash => Some(UnaryOperator::Minus),
            _ => None,
        }
    }

    /// How the token is named in syntax error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::End => "end of input".to_string(),
            token => format!("'{}'", token),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Plus => write!(f, "+"),
            Token::Dash => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::DoubleAsterisk => write!(f, "**"),
            Token::Caret => write!(f, "^"),
            Token::ForwardSlash => write!(f, "/"),
            Token::LeftParentheses => write!(f, "("),
            Token::RightParentheses => write!(f, ")"),
            Token::End => Ok(()),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::End => write!(f, "<end>"),
            token => write!(f, "{}", token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_and_double_asterisk_are_both_exponentiation() {
        assert_eq!(
            Token::Caret.as_binary_operator(),
            Token::DoubleAsterisk.as_binary_operator()
        );
    }

    #[test]
    fn end_is_described_as_end_of_input() {
        assert_eq!(Token::End.describe(), "end of input");
        assert_eq!(Token::Asterisk.describe(), "'*'");
    }
}
