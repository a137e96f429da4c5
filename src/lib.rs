//! # tally
//!
//! tally is an arithmetic expression evaluator written in Rust.
//! It lexes, parses, and evaluates expressions built from non-negative
//! integers, `+`, `-`, `*`, `/` and parentheses, following the usual
//! precedence and left associativity.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::{ParseError, RuntimeError},
    interpreter::{
        lexer::{Lexer, Token},
        parser::core::Parser,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent an expression as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the number and binary operation nodes.
/// - Attaches source columns to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating an expression. Every error carries the source column it
/// refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the whole pipeline.
///
/// This module ties together lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses `source` into an expression tree.
///
/// # Errors
/// Returns the first lexical or syntax error found.
///
/// # Examples
/// ```
/// use tally::parse;
///
/// let tree = parse("2 + 3 * 4").unwrap();
/// assert_eq!(tree.to_string(), "(2 + (3 * 4))");
///
/// assert!(parse("(2 + 3").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    Parser::new(Lexer::new(source)).parse()
}

/// Evaluates a parsed expression tree.
///
/// # Errors
/// Returns an error on division by zero.
///
/// # Examples
/// ```
/// use tally::{evaluate, parse};
///
/// let tree = parse("(2 + 3) * 5").unwrap();
/// assert_eq!(evaluate(&tree).unwrap(), 25.0);
/// ```
pub fn evaluate(expr: &Expr) -> Result<f64, RuntimeError> {
    interpreter::evaluator::core::evaluate(expr)
}

/// Splits `source` into tokens paired with their columns.
///
/// The end of input is not included. Invalid characters show up as
/// [`Token::Invalid`] entries.
///
/// # Examples
/// ```
/// use tally::{interpreter::lexer::Token, tokenize};
///
/// let tokens = tokenize("1+ 2");
/// assert_eq!(tokens,
///            vec![(Token::Number("1".to_string()), 1),
///                 (Token::Plus, 2),
///                 (Token::Number("2".to_string()), 4),]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    Lexer::new(source).collect()
}

/// Returns the value of the expression in `source`.
///
/// This function parses the source and evaluates the resulting tree. If
/// either stage fails, the error is returned with details about the failure.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use tally::get_result;
///
/// // Multiplication binds tighter than addition.
/// assert_eq!(get_result("2 + 3 * 4").unwrap(), 14.0);
///
/// // Example with an intentional error.
/// assert!(get_result("1 / 0").is_err());
/// ```
pub fn get_result(source: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let tree = parse(source)?;
    Ok(evaluate(&tree)?)
}
