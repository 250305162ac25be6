use crate::interpreter::constant::Constant;
use crate::interpreter::error::LexicalError;
use crate::interpreter::token::Token;
use itertools::Itertools;
use log::trace;
use std::iter::{Enumerate, Peekable};
use std::str::Chars;

/// Characters paired with their index, counted in characters rather than bytes.
type Characters<'a> = Peekable<Enumerate<Chars<'a>>>;

/// Splits the given text into tokens, terminated by [`Token::End`].
///
/// Multiplication is made explicit wherever it is only implied by adjacency,
/// so `5(3+1)`, `2pi` and `(5)(3)` come out with an `*` between the operands.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in infix order.
///
/// # Examples
///
/// ```
/// use kacalc::interpreter::lexer::tokenize;
/// use kacalc::interpreter::token::Token;
///
/// let tokens = tokenize("2pi").unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Number(2.0),
///         Token::Asterisk,
///         Token::Identifier("pi".to_string()),
///         Token::End,
///     ]
/// );
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, LexicalError> {
    let mut characters = expression.chars().enumerate().peekable();
    let mut tokens = Vec::new();

    while let Some(&(position, character)) = characters.peek() {
        let token = match character {
            c if c.is_whitespace() => {
                characters.next();
                continue;
            }
            c if c.is_ascii_digit() || c == '.' => scan_number(&mut characters)?,
            c if c.is_alphabetic() => scan_identifier(&mut characters),
            '*' => {
                characters.next();
                match characters.next_if(|&(_, next)| next == '*') {
                    Some(_) => Token::DoubleAsterisk,
                    None => Token::Asterisk,
                }
            }
            _ => {
                characters.next();
                match character {
                    '+' => Token::Plus,
                    '-' => Token::Dash,
                    '/' => Token::ForwardSlash,
                    '^' => Token::Caret,
                    '(' => Token::LeftParentheses,
                    ')' => Token::RightParentheses,
                    _ => {
                        return Err(LexicalError::InvalidCharacter {
                            character,
                            position,
                        })
                    }
                }
            }
        };
        tokens.push(token);
    }
    tokens.push(Token::End);

    Ok(insert_implicit_multiplication(tokens))
}

fn scan_number(characters: &mut Characters) -> Result<Token, LexicalError> {
    let mut text = String::new();
    let mut position = None;
    while let Some((index, character)) =
        characters.next_if(|&(_, c)| c.is_ascii_digit() || c == '.')
    {
        position.get_or_insert(index);
        text.push(character);
    }
    let position = position.unwrap_or_default();

    let malformed = || LexicalError::MalformedNumber {
        text: text.clone(),
        position,
    };
    let has_digits = text.chars().any(|c| c.is_ascii_digit());
    if !has_digits || text.matches('.').count() > 1 {
        return Err(malformed());
    }
    text.parse::<f64>()
        .map(Token::Number)
        .map_err(|_| malformed())
}

fn scan_identifier(characters: &mut Characters) -> Token {
    let name: String = characters
        .peeking_take_while(|&(_, c)| c.is_alphanumeric() || c == '_')
        .map(|(_, c)| c)
        .collect();
    Token::Identifier(name)
}

fn insert_implicit_multiplication(tokens: Vec<Token>) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    for (current, next) in tokens.iter().tuple_windows() {
        output.push(current.clone());
        if implies_multiplication(current, next) {
            trace!("Inserting implicit '*' between {:?} and {:?}", current, next);
            output.push(Token::Asterisk);
        }
    }
    if let Some(last) = tokens.last() {
        output.push(last.clone());
    }
    output
}

/// A value directly followed by another value is a product. A constant counts as
/// a value on the left, but a function name never does since it is followed by its call.
fn implies_multiplication(current: &Token, next: &Token) -> bool {
    let current_is_value = match current {
        Token::Identifier(name) => Constant::from_name(name).is_some(),
        token => token.ends_value(),
    };
    current_is_value && next.starts_value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    fn identifier(name: &str) -> Token {
        Token::Identifier(name.to_string())
    }

    #[test]
    fn simple_expression_returns_tokens() {
        let tokens = tokenize("5+3").unwrap();

        assert_eq!(
            tokens,
            vec![Token::Number(5.0), Token::Plus, Token::Number(3.0), Token::End]
        );
    }

    #[test]
    fn whitespace_is_skipped() {
        let tokens = tokenize("  12.5 /\t( 4 )\n").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::Number(12.5),
                Token::ForwardSlash,
                Token::LeftParentheses,
                Token::Number(4.0),
                Token::RightParentheses,
                Token::End,
            ]
        );
    }

    #[test]
    fn double_asterisk_is_a_single_token() {
        let tokens = tokenize("2**3*4^5").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::Number(2.0),
                Token::DoubleAsterisk,
                Token::Number(3.0),
                Token::Asterisk,
                Token::Number(4.0),
                Token::Caret,
                Token::Number(5.0),
                Token::End,
            ]
        );
    }

    #[test]
    fn identifiers_include_digits_and_underscores() {
        let tokens = tokenize("log_2x1").unwrap();

        assert_eq!(tokens, vec![identifier("log_2x1"), Token::End]);
    }

    #[test]
    fn function_call_gets_no_implicit_multiplication() {
        let tokens = tokenize("sqrt(9)").unwrap();

        assert_eq!(
            tokens,
            vec![
                identifier("sqrt"),
                Token::LeftParentheses,
                Token::Number(9.0),
                Token::RightParentheses,
                Token::End,
            ]
        );
    }

    #[parameterized(
    expression = {
    "5(3+1)",
    "5sin(0)",
    "pi(2)",
    "(5)(3)",
    "2 3",
    "(1)2",
    "pi e",
    },
    expected = {
    "5 * ( 3 + 1 )",
    "5 * sin ( 0 )",
    "pi * ( 2 )",
    "( 5 ) * ( 3 )",
    "2 * 3",
    "( 1 ) * 2",
    "pi * e",
    }
    )]
    fn implicit_multiplication_is_inserted(expression: &str, expected: &str) {
        let tokens = tokenize(expression).unwrap();
        let actual = tokens
            .iter()
            .filter(|token| **token != Token::End)
            .join(" ");

        assert_eq!(actual, expected);
    }

    #[test]
    fn unknown_identifier_followed_by_parenthesis_is_left_alone() {
        let tokens = tokenize("foo(1)").unwrap();

        assert_eq!(tokens[1], Token::LeftParentheses);
    }

    #[parameterized(
    expression = { "1.2.3", ".", "4 + ." },
    expected_text = { "1.2.3", ".", "." },
    expected_position = { 0, 0, 4 }
    )]
    fn malformed_number_is_rejected(
        expression: &str,
        expected_text: &str,
        expected_position: usize,
    ) {
        let error = tokenize(expression).unwrap_err();

        assert_eq!(
            error,
            LexicalError::MalformedNumber {
                text: expected_text.to_string(),
                position: expected_position,
            }
        );
    }

    #[test]
    fn leading_and_trailing_points_are_valid_numbers() {
        assert_eq!(tokenize(".5").unwrap()[0], Token::Number(0.5));
        assert_eq!(tokenize("5.").unwrap()[0], Token::Number(5.0));
    }

    #[test]
    fn invalid_character_is_rejected() {
        let error = tokenize("5 # 3").unwrap_err();

        assert_eq!(
            error,
            LexicalError::InvalidCharacter {
                character: '#',
                position: 2,
            }
        );
    }

    #[test]
    fn error_position_counts_characters_not_bytes() {
        let error = tokenize("é × 2").unwrap_err();

        assert_eq!(
            error,
            LexicalError::InvalidCharacter {
                character: '×',
                position: 2,
            }
        );
    }

    #[test]
    fn empty_input_is_only_end() {
        assert_eq!(tokenize("").unwrap(), vec![Token::End]);
    }
}
