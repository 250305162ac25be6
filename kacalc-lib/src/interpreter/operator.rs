use crate::interpreter::error::{ArithmeticError, CalculationError, DomainError};
use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// Every operator spelling the lexer accepts. `^` is an alias of `**`.
pub const OPERATOR_SYMBOLS: [&str; 6] = ["+", "-", "*", "/", "**", "^"];

/// Checks whether the given text is exactly one of the operator symbols.
pub fn is_operator_symbol(text: &str) -> bool {
    OPERATOR_SYMBOLS.contains(&text)
}

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

/// A sign placed in front of an operand.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Plus,
    Minus,
}

/// Signs bind tighter than every binary operator, including `**`.
const UNARY_PRECEDENCE: u8 = 4;

impl UnaryOperator {
    pub fn token(&self) -> Token {
        match self {
            UnaryOperator::Plus => Token::Plus,
            UnaryOperator::Minus => Token::Dash,
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        UNARY_PRECEDENCE
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            UnaryOperator::Plus => x,
            UnaryOperator::Minus => -x,
        }
    }
}

impl BinaryOperator {
    pub fn token(&self) -> Token {
        match self {
            BinaryOperator::Add => Token::Plus,
            BinaryOperator::Subtract => Token::Dash,
            BinaryOperator::Multiply => Token::Asterisk,
            BinaryOperator::Divide => Token::ForwardSlash,
            BinaryOperator::Exponentiate => Token::DoubleAsterisk,
        }
    }

    pub(crate) fn associativity(&self) -> Associativity {
        match self {
            BinaryOperator::Add
            | BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide => Associativity::Left,
            BinaryOperator::Exponentiate => Associativity::Right,
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
            BinaryOperator::Exponentiate => 3,
        }
    }

    pub(crate) fn precedence_eq(&self, other: &Self) -> bool {
        self.precedence().eq(&other.precedence())
    }

    pub(crate) fn precedence_gt(&self, other: &Self) -> bool {
        self.precedence().gt(&other.precedence())
    }

    pub fn evaluate(&self, a: f64, b: f64) -> Result<f64, CalculationError> {
        match self {
            BinaryOperator::Add => Ok(a + b),
            BinaryOperator::Subtract => Ok(a - b),
            BinaryOperator::Multiply => Ok(a * b),
            BinaryOperator::Divide => {
                if b == 0.0 {
                    return Err(ArithmeticError::DivisionByZero.into());
                }
                Ok(a / b)
            }
            BinaryOperator::Exponentiate => {
                if a < 0.0 && b.fract() != 0.0 {
                    return Err(DomainError::FractionalPowerOfNegative {
                        base: a,
                        exponent: b,
                    }
                    .into());
                }
                if a == 0.0 && b < 0.0 {
                    return Err(ArithmeticError::DivisionByZero.into());
                }
                Ok(a.powf(b))
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn operator_equality_correspond_with_precedence() {
        let equal1 = BinaryOperator::Multiply;
        let equal2 = BinaryOperator::Divide;
        assert!(equal1.precedence_eq(&equal2))
    }

    #[test]
    fn operator_gt_correspond_with_precedence() {
        let greater = BinaryOperator::Exponentiate;
        let lesser = BinaryOperator::Multiply;
        assert!(greater.precedence_gt(&lesser))
    }

    #[test]
    fn signs_bind_tighter_than_exponentiation() {
        assert!(UnaryOperator::Minus.precedence() > BinaryOperator::Exponentiate.precedence())
    }

    #[test]
    fn only_exponentiation_is_right_associative() {
        assert_eq!(
            BinaryOperator::Exponentiate.associativity(),
            Associativity::Right
        );
        assert_eq!(BinaryOperator::Subtract.associativity(), Associativity::Left);
    }

    #[parameterized(
    operator = {
    BinaryOperator::Add,
    BinaryOperator::Subtract,
    BinaryOperator::Multiply,
    BinaryOperator::Divide,
    BinaryOperator::Exponentiate,
    BinaryOperator::Exponentiate,
    BinaryOperator::Exponentiate,
    },
    a = { 2.0, 2.0, 2.0, 1.0, 2.0, 9.0, -8.0 },
    b = { 3.0, 3.0, 3.0, 4.0, -1.0, 2.0, 3.0 },
    expected = { 5.0, -1.0, 6.0, 0.25, 0.5, 81.0, -512.0 }
    )]
    fn binary_operator_evaluates_correctly(
        operator: BinaryOperator,
        a: f64,
        b: f64,
        expected: f64,
    ) {
        assert_eq!(operator.evaluate(a, b).unwrap(), expected);
    }

    #[test]
    fn division_by_zero_is_an_arithmetic_error() {
        let error = BinaryOperator::Divide.evaluate(10.0, 0.0).unwrap_err();
        assert_eq!(error, CalculationError::from(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn zero_to_negative_power_is_division_by_zero() {
        let error = BinaryOperator::Exponentiate.evaluate(0.0, -1.0).unwrap_err();
        assert_eq!(error, CalculationError::from(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn negative_base_with_fractional_exponent_is_a_domain_error() {
        let error = BinaryOperator::Exponentiate
            .evaluate(-8.0, 1.0 / 3.0)
            .unwrap_err();
        assert!(matches!(
            error,
            CalculationError::Domain(DomainError::FractionalPowerOfNegative { .. })
        ));
    }

    #[test]
    fn operator_symbols_include_caret_alias() {
        assert!(is_operator_symbol("^"));
        assert!(is_operator_symbol("**"));
        assert!(!is_operator_symbol("("));
    }
}
