//! Evaluates arithmetic expressions written the way people type them into a calculator.
//!
//! Text goes through a lexer, an infix-to-postfix converter and an expression tree before
//! it is evaluated and formatted. See [`interpreter::evaluate`] for the one-call entry point.

pub mod interpreter;
