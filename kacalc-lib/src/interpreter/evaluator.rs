use crate::interpreter::error::{ArithmeticError, CalculationError};
use crate::interpreter::parser::{last_operand, pop_operand, PostfixToken};

/// Evaluates a postfix token sequence to a single number.
///
/// Operands are kept on an explicit stack, so the length of an expression never
/// costs recursion depth. Every intermediate value must stay finite.
///
/// # Arguments
///
/// * `postfix_tokens`: The expression to evaluate, in postfix order.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), kacalc::interpreter::error::CalculationError> {
/// use kacalc::interpreter::evaluator::evaluate;
/// use kacalc::interpreter::lexer::tokenize;
/// use kacalc::interpreter::parser::to_postfix;
///
/// let postfix = to_postfix(tokenize("2 ** 3 ** 2")?)?;
/// assert_eq!(evaluate(&postfix)?, 512.0);
/// # Ok(()) }
/// ```
pub fn evaluate(postfix_tokens: &[PostfixToken]) -> Result<f64, CalculationError> {
    let mut operands: Vec<f64> = Vec::new();

    for token in postfix_tokens {
        let value = match token {
            PostfixToken::Number(value) => *value,
            PostfixToken::UnaryOperator(operator) => {
                operator.evaluate(pop_operand(&mut operands, token)?)
            }
            PostfixToken::Function(function) => {
                function.evaluate(pop_operand(&mut operands, token)?)?
            }
            PostfixToken::BinaryOperator(operator) => {
                let right = pop_operand(&mut operands, token)?;
                let left = pop_operand(&mut operands, token)?;
                operator.evaluate(left, right)?
            }
        };
        if !value.is_finite() {
            return Err(ArithmeticError::NonFinite.into());
        }
        operands.push(value);
    }

    last_operand(operands)
}
