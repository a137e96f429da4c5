use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor: a number or a parenthesized expression.
    ///
    /// Parentheses only group; the inner expression is returned as is.
    ///
    /// Grammar: `factor := NUMBER | "(" expression ")"`
    ///
    /// # Errors
    /// - `InvalidCharacter` if the lexer reported a character outside the
    ///   token alphabet here.
    /// - `UnexpectedEndOfInput` if the source ends where a factor is needed.
    /// - `UnexpectedToken` for an operator or `)` in factor position.
    /// - `ExpectedClosingParen` if a group is not closed.
    pub(super) fn parse_factor(&mut self) -> ParseResult<Expr> {
        let column = self.current_column;

        match &self.current {
            Token::Number(digits) => {
                let value = digits_to_f64(digits);
                self.advance();
                Ok(Expr::Number { value, column })
            },
            Token::LParen => {
                self.advance();
                let expr = self.parse_expression()?;

                if self.current != Token::RParen {
                    return Err(ParseError::ExpectedClosingParen { found:  self.current.to_string(),
                                                                  column: self.current_column, });
                }
                self.advance();
                Ok(expr)
            },
            Token::Invalid(description) => {
                Err(ParseError::InvalidCharacter { description: description.clone(),
                                                   column })
            },
            Token::EndOfInput => Err(ParseError::UnexpectedEndOfInput { column }),
            token => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                       column }),
        }
    }
}

/// Converts the digit payload of a number token.
///
/// The lexer only emits runs of ASCII digits, which always parse; runs too
/// long for `f64` become infinity.
fn digits_to_f64(digits: &str) -> f64 {
    digits.parse()
          .unwrap_or_else(|_| unreachable!("number token with non-digit payload {digits:?}"))
}
