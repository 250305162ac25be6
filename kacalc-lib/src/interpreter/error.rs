use crate::interpreter::function::Function;
use thiserror::Error;

/// Any failure raised while turning text into a number.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    #[error("lexical error: {0}")]
    Lexical(#[from] LexicalError),
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

/// A character the scanner could not turn into a token. Positions are character
/// indices into the input, starting at zero.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexicalError {
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("malformed number '{text}' at position {position}")]
    MalformedNumber { text: String, position: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
    },
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    #[error("unknown constant '{0}'")]
    UnknownConstant(String),
    #[error("mismatched parentheses")]
    MismatchedParentheses,
    #[error("unexpected trailing token {0}")]
    TrailingToken(String),
    #[error("insufficient operands for {0}")]
    InsufficientOperands(String),
    #[error("expression nests deeper than {0} levels")]
    NestingTooDeep(usize),
    #[error("empty expression")]
    EmptyExpression,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{function} is undefined for {argument} (argument must be {requirement})")]
    Function {
        function: Function,
        argument: f64,
        requirement: &'static str,
    },
    #[error("{base} cannot be raised to the non-integer power {exponent}")]
    FractionalPowerOfNegative { base: f64, exponent: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not a finite number")]
    NonFinite,
    #[error("invalid expression: {0}")]
    InvalidExpression(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculation_error_prefixes_its_class() {
        let error: CalculationError = ArithmeticError::DivisionByZero.into();

        assert_eq!(error.to_string(), "arithmetic error: division by zero");
    }

    #[test]
    fn domain_error_names_the_function() {
        let error: CalculationError = DomainError::Function {
            function: Function::SquareRoot,
            argument: -4.0,
            requirement: ">= 0",
        }
        .into();

        assert_eq!(
            error.to_string(),
            "domain error: sqrt is undefined for -4 (argument must be >= 0)"
        );
    }

    #[test]
    fn unexpected_token_reports_expected_and_found() {
        let error = SyntaxError::UnexpectedToken {
            expected: "an operand",
            found: "end of input".into(),
        };

        assert_eq!(error.to_string(), "expected an operand, found end of input");
    }
}
