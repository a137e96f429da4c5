use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`, so
    /// `10 - 2 - 3` becomes `(10 - 2) - 3`.
    ///
    /// The rule is: `expression := term (("+" | "-") term)*`
    pub(super) fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;
        loop {
            if let Some(op) = token_to_binary_operator(&self.current)
               && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            {
                let column = self.current_column;
                self.advance();
                let right = self.parse_term()?;
                left = Expr::binary(left, op, right, column);
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators `*` and `/`.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    pub(super) fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;
        loop {
            if let Some(op) = token_to_binary_operator(&self.current)
               && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
            {
                let column = self.current_column;
                self.advance();
                let right = self.parse_factor()?;
                left = Expr::binary(left, op, right, column);
                continue;
            }
            break;
        }
        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not operators.
///
/// # Example
/// ```
/// use tally::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Star), Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
