pub mod constant;
pub mod error;
pub mod evaluator;
pub mod formatter;
pub mod function;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod syntax;
pub mod token;

pub use constant::{constant_names, Constant};
pub use function::{function_names, Function};
pub use operator::{is_operator_symbol, OPERATOR_SYMBOLS};

use crate::interpreter::error::{CalculationError, SyntaxError};
use crate::interpreter::formatter::format_number;
use crate::interpreter::token::Token;
use log::debug;
use string_builder::Builder;
use syntax::expression_tree::Node;

/// Every failed evaluation is reported as a string starting with this prefix.
pub const ERROR_PREFIX: &str = "Error: ";

/// Evaluates the given expression and formats the result for display.
///
/// This never fails: empty or whitespace-only input gives an empty string, and any
/// failure is returned as a string starting with [`ERROR_PREFIX`].
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The formatted result, or a description of what went wrong.
///
/// # Examples
///
/// ```
/// use kacalc::interpreter::evaluate;
///
/// assert_eq!(evaluate("2**3"), "8");
/// assert_eq!(evaluate("5(3+1)"), "20");
/// assert_eq!(evaluate("10/0"), "Error: arithmetic error: division by zero");
/// assert_eq!(evaluate(""), "");
/// ```
pub fn evaluate(expression: &str) -> String {
    if expression.trim().is_empty() {
        return String::new();
    }

    let formatted = calculate(expression)
        .and_then(|value| format_number(value).map_err(CalculationError::from));
    match formatted {
        Ok(result) => {
            debug!("{} = {}", expression, result);
            result
        }
        Err(error) => {
            debug!("Failed to evaluate {:?}: {:?}", expression, error);
            format!("{}{}", ERROR_PREFIX, error)
        }
    }
}

/// Calculates the numeric value of the given expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The finite value of the expression.
///
/// # Examples
///
/// ```
/// use kacalc::interpreter::calculate;
/// # use kacalc::interpreter::error::CalculationError;
///
/// # fn main() -> Result<(), CalculationError> {
/// let value = calculate("2pi")?;
/// assert!((value - std::f64::consts::TAU).abs() < 1e-12);
/// # Ok(()) }
/// ```
pub fn calculate(expression: &str) -> Result<f64, CalculationError> {
    if expression.trim().is_empty() {
        return Err(SyntaxError::EmptyExpression.into());
    }
    let tokens = lexer::tokenize(expression)?;
    debug!("Tokens: {:?}", tokens);
    let postfix_tokens = parser::to_postfix(tokens)?;
    evaluator::evaluate(&postfix_tokens)
}

/// Converts the given input string into an equivalent expression tree.
///
/// The tree is for display and inspection. Its depth is bounded by
/// [`syntax::expression_tree::MAX_DEPTH`], which long flat chains can exceed even
/// though [`calculate`] accepts them.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use kacalc::interpreter::convert;
/// # use kacalc::interpreter::error::CalculationError;
///
/// # fn main() -> Result<(), CalculationError> {
/// let tree = convert("1 + sqrt(16)")?;
/// print!("{}", tree);
/// # Ok(()) }
/// ```
pub fn convert(expression: &str) -> Result<Node, CalculationError> {
    let tokens = lexer::tokenize(expression)?;
    debug!("Tokens: {:?}", tokens);
    let expression_tree = parser::parse(tokens)?;
    Ok(expression_tree)
}

/// Rewrites the given expression with implicit multiplication made explicit
/// and operators spaced out.
///
/// # Examples
///
/// ```
/// use kacalc::interpreter::normalize;
///
/// assert_eq!(normalize("5(3+1)").unwrap(), "5 * (3 + 1)");
/// ```
pub fn normalize(expression: &str) -> Result<String, CalculationError> {
    let tokens = lexer::tokenize(expression)?;
    Ok(tokens_to_string(&tokens))
}

/// Pretty-prints the given tokens with added whitespace.
///
/// Binary operators are surrounded by spaces, while signs, exponentiation and
/// parentheses are kept tight.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use kacalc::interpreter::tokens_to_string;
/// use kacalc::interpreter::token::Token;
///
/// let tokens = vec![
///     Token::Number(2.0),
///     Token::DoubleAsterisk,
///     Token::Dash,
///     Token::Number(1.0),
/// ];
/// assert_eq!(tokens_to_string(&tokens), "2**-1");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    let mut builder = Builder::new(tokens.len());
    let mut previous: Option<&Token> = None;

    for token in tokens {
        let is_sign = matches!(token, Token::Plus | Token::Dash)
            && previous.map_or(true, |previous| {
                previous.as_binary_operator().is_some() || *previous == Token::LeftParentheses
            });
        match token {
            Token::DoubleAsterisk | Token::Caret => builder.append(token.to_string()),
            Token::Plus | Token::Dash | Token::Asterisk | Token::ForwardSlash if !is_sign => {
                builder.append(" ");
                builder.append(token.to_string());
                builder.append(" ");
            }
            _ => builder.append(token.to_string()),
        }
        previous = Some(token);
    }

    // Only whole strings were appended, so the bytes are always valid UTF-8.
    builder.string().unwrap_or_default()
}
