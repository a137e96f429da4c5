use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::lexer::{Lexer, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser with a single token of lookahead.
///
/// The parser owns its [`Lexer`] and pulls tokens from it on demand. At any
/// point `current` holds the next unconsumed token; parse functions inspect
/// it and advance past it once they have matched it.
pub struct Parser<'a> {
    lexer:                     Lexer<'a>,
    pub(super) current:        Token,
    pub(super) current_column: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser and primes the lookahead with the first token.
    #[must_use]
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        let current_column = lexer.column();
        Self { lexer,
               current,
               current_column }
    }

    /// Parses the source as a single expression.
    ///
    /// Parsing stops after the first complete expression; anything left in
    /// the source is not examined, so `2 3` parses as `2`.
    ///
    /// # Errors
    /// Any error from [`Parser::parse_expression`].
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::{lexer::Lexer, parser::core::Parser};
    ///
    /// let tree = Parser::new(Lexer::new("(2 + 3) * 5")).parse().unwrap();
    /// assert_eq!(tree.to_string(), "((2 + 3) * 5)");
    /// ```
    pub fn parse(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;

        if self.current != Token::EndOfInput {
            debug!(token = %self.current,
                   column = self.current_column,
                   "ignoring input after complete expression");
        }
        debug!(tree = %expr, "parsed expression");
        Ok(expr)
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, addition, and recursively descends through
    /// the precedence hierarchy.
    ///
    /// Grammar: `expression := term (("+" | "-") term)*`
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_additive()
    }

    /// Replaces the lookahead with the next token from the lexer.
    pub(super) fn advance(&mut self) {
        self.current = self.lexer.next_token();
        self.current_column = self.lexer.column();
    }
}
