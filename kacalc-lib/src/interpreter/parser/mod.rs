mod infix_converter;

use crate::interpreter::error::{ArithmeticError, CalculationError, SyntaxError};
use crate::interpreter::function::Function;
use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::syntax::expression_tree;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::Token;
use itertools::Itertools;
use log::debug;
use std::fmt;
use std::fmt::Formatter;

/// Most operators that may wait on the stack at once, which bounds how deeply
/// parentheses, signs, function calls and `**` towers can nest.
pub const MAX_NESTING: usize = 1000;

/// A resolved element of an expression in postfix (reverse Polish) order.
/// Constants have already been replaced by their values.
#[derive(Debug, Clone, PartialEq)]
pub enum PostfixToken {
    Number(f64),
    UnaryOperator(UnaryOperator),
    BinaryOperator(BinaryOperator),
    Function(Function),
}

impl fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PostfixToken::Number(value) => write!(f, "{}", value),
            PostfixToken::UnaryOperator(UnaryOperator::Plus) => write!(f, "pos"),
            PostfixToken::UnaryOperator(UnaryOperator::Minus) => write!(f, "neg"),
            PostfixToken::BinaryOperator(operator) => write!(f, "{}", operator),
            PostfixToken::Function(function) => write!(f, "{}", function),
        }
    }
}

/// Converts the given infix tokens into postfix order, resolving constants and signs.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to convert, in infix format, as produced by the lexer.
///
/// returns: The equivalent sequence in postfix order.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), kacalc::interpreter::error::CalculationError> {
/// use kacalc::interpreter::lexer::tokenize;
/// use kacalc::interpreter::parser::to_postfix;
///
/// let postfix = to_postfix(tokenize("1 - (2 + 3)")?)?;
/// assert_eq!(postfix.len(), 5);
/// # Ok(()) }
/// ```
pub fn to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<PostfixToken>, CalculationError> {
    let postfix_tokens = infix_to_postfix(infix_tokens)?;
    debug!("Postfix: {}", postfix_tokens.iter().join(" "));
    Ok(postfix_tokens)
}

/// Parses the given tokens into an equivalent expression tree.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format, as produced by the lexer.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), kacalc::interpreter::error::CalculationError> {
/// use kacalc::interpreter::parser::parse;
/// use kacalc::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::Number(2.0),
///     Token::Caret,
///     Token::Number(3.0),
///     Token::End,
/// ];
/// let tree = parse(infix_tokens)?;
/// print!("{}", tree);
/// # Ok(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Node, CalculationError> {
    expression_tree::new_tree(to_postfix(infix_tokens)?)
}

/// Pops the operand the given postfix token applies to.
pub(crate) fn pop_operand<T>(
    operands: &mut Vec<T>,
    token: &PostfixToken,
) -> Result<T, SyntaxError> {
    operands
        .pop()
        .ok_or_else(|| SyntaxError::InsufficientOperands(format!("'{}'", token)))
}

/// Takes the single operand left once every postfix token has been consumed.
pub(crate) fn last_operand<T>(mut operands: Vec<T>) -> Result<T, CalculationError> {
    let last = operands.pop().ok_or(SyntaxError::EmptyExpression)?;
    if !operands.is_empty() {
        return Err(ArithmeticError::InvalidExpression(format!(
            "{} operands were never combined",
            operands.len() + 1
        ))
        .into());
    }
    Ok(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;
    use pretty_assertions::assert_eq;

    #[test]
    fn tokens_parse_into_tree() {
        let tokens = tokenize("1 + 2 * 3").unwrap();

        let tree = parse(tokens).unwrap();

        let expected = Node::new_binary_operation(
            BinaryOperator::Add,
            Node::new_number(1.0),
            Node::new_binary_operation(
                BinaryOperator::Multiply,
                Node::new_number(2.0),
                Node::new_number(3.0),
            ),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn postfix_tokens_print_signs_by_name() {
        let postfix = [
            PostfixToken::Number(5.0),
            PostfixToken::UnaryOperator(UnaryOperator::Minus),
            PostfixToken::Function(Function::SquareRoot),
        ];

        assert_eq!(postfix.iter().join(" "), "5 neg sqrt");
    }
}
