use crate::interpreter::constant::Constant;
use crate::interpreter::error::{CalculationError, SyntaxError};
use crate::interpreter::function::Function;
use crate::interpreter::operator::{Associativity, BinaryOperator, UnaryOperator};
use crate::interpreter::parser::{PostfixToken, MAX_NESTING};
use crate::interpreter::token::Token;

const OPERAND: &str = "a number, constant, function or '('";

/// An entry waiting on the operator stack.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Pending {
    BinaryOperator(BinaryOperator),
    UnaryOperator(UnaryOperator),
    Function(Function),
    LeftParentheses,
}

impl Pending {
    fn into_postfix(self) -> Option<PostfixToken> {
        match self {
            Pending::BinaryOperator(operator) => Some(PostfixToken::BinaryOperator(operator)),
            Pending::UnaryOperator(operator) => Some(PostfixToken::UnaryOperator(operator)),
            Pending::Function(function) => Some(PostfixToken::Function(function)),
            Pending::LeftParentheses => None,
        }
    }
}

/// Converts infix tokens to postfix order with the shunting-yard algorithm.
///
/// Alongside reordering, this validates the token sequence: it tracks whether an
/// operand or an operator is expected next, which is also how a `+` or `-` is
/// told apart as a sign or a binary operator.
///
/// Nesting is measured by how many operators are waiting at once. Flat chains such as
/// `1 + 1 + ... + 1` never keep more than one waiting, however long they are.
pub(super) fn infix_to_postfix(
    infix_tokens: Vec<Token>,
) -> Result<Vec<PostfixToken>, CalculationError> {
    let mut tokens = infix_tokens.into_iter().peekable();
    let mut operators: Vec<Pending> = vec![];
    let mut output: Vec<PostfixToken> = vec![];
    let mut expect_operand = true;

    while let Some(token) = tokens.next() {
        if token == Token::End {
            break;
        }
        if expect_operand {
            match token {
                Token::Number(value) => {
                    output.push(PostfixToken::Number(value));
                    expect_operand = false;
                }
                Token::Identifier(name) => {
                    if tokens.peek() == Some(&Token::LeftParentheses) {
                        let function = Function::from_name(&name)
                            .ok_or(SyntaxError::UnknownFunction(name))?;
                        operators.push(Pending::Function(function));
                    } else {
                        let constant = Constant::from_name(&name)
                            .ok_or(SyntaxError::UnknownConstant(name))?;
                        output.push(PostfixToken::Number(constant.value()));
                        expect_operand = false;
                    }
                }
                Token::LeftParentheses => operators.push(Pending::LeftParentheses),
                // A prefix operator never pops anything off the stack.
                Token::Plus => operators.push(Pending::UnaryOperator(UnaryOperator::Plus)),
                Token::Dash => operators.push(Pending::UnaryOperator(UnaryOperator::Minus)),
                other => {
                    return Err(SyntaxError::UnexpectedToken {
                        expected: OPERAND,
                        found: other.describe(),
                    }
                    .into())
                }
            }
        } else {
            match token {
                Token::RightParentheses => {
                    parse_closing_parenthesis_token(&mut operators, &mut output)?
                }
                ref other => match other.as_binary_operator() {
                    Some(operator) => {
                        parse_operator_token(&mut operators, &mut output, operator);
                        expect_operand = true;
                    }
                    None => return Err(SyntaxError::TrailingToken(other.describe()).into()),
                },
            }
        }
        if operators.len() > MAX_NESTING {
            return Err(SyntaxError::NestingTooDeep(MAX_NESTING).into());
        }
    }

    if expect_operand {
        return Err(SyntaxError::UnexpectedToken {
            expected: OPERAND,
            found: Token::End.describe(),
        }
        .into());
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut Vec<Pending>,
    output: &mut Vec<PostfixToken>,
) -> Result<(), SyntaxError> {
    while let Some(pending) = operators.pop() {
        match pending.into_postfix() {
            Some(postfix_token) => output.push(postfix_token),
            None => return Err(SyntaxError::MismatchedParentheses),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<Pending>,
    output: &mut Vec<PostfixToken>,
) -> Result<(), SyntaxError> {
    loop {
        match operators.pop() {
            None => return Err(SyntaxError::MismatchedParentheses),
            Some(Pending::LeftParentheses) => break, // Discard the open parenthesis.
            Some(pending) => {
                if let Some(postfix_token) = pending.into_postfix() {
                    output.push(postfix_token);
                }
            }
        }
    }
    if let Some(&Pending::Function(function)) = operators.last() {
        operators.pop();
        output.push(PostfixToken::Function(function));
    }
    Ok(())
}

fn parse_operator_token(
    operators: &mut Vec<Pending>,
    output: &mut Vec<PostfixToken>,
    operator: BinaryOperator,
) {
    while let Some(&top_of_operator_stack) = operators.last() {
        let pops = match top_of_operator_stack {
            Pending::UnaryOperator(sign) => sign.precedence() > operator.precedence(),
            Pending::BinaryOperator(other_operator) => {
                other_operator.precedence_gt(&operator)
                    || (other_operator.precedence_eq(&operator)
                        && operator.associativity() == Associativity::Left)
            }
            Pending::Function(_) | Pending::LeftParentheses => false,
        };
        if !pops {
            break;
        }
        operators.pop();
        if let Some(postfix_token) = top_of_operator_stack.into_postfix() {
            output.push(postfix_token);
        }
    }

    operators.push(Pending::BinaryOperator(operator));
}
