use logos::Logos;
use tracing::trace;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the expression language.
/// Whitespace separates tokens and is skipped.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Integer literal tokens, such as `42`. The payload is the exact digit
    /// run as it appears in the source.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// A character outside the token alphabet, with a description that
    /// includes the character itself.
    Invalid(String),
    /// End of the source text.
    EndOfInput,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(digits) => write!(f, "number {digits}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Invalid(description) => write!(f, "{description}"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// On-demand tokenizer over a borrowed source string.
///
/// Wraps the generated `logos` lexer so that the parser can pull exactly one
/// token at a time. Characters outside the token alphabet do not stop the
/// scan; they come back as [`Token::Invalid`] and lexing continues after
/// them. Once the source is exhausted every call returns
/// [`Token::EndOfInput`].
///
/// The lexer also tracks the 1-based character column of the last token it
/// produced, which the parser attaches to tree nodes and errors.
pub struct Lexer<'a> {
    inner:         logos::Lexer<'a, Token>,
    /// Byte offset up to which `cursor_column` has been counted.
    offset:        usize,
    cursor_column: usize,
    token_column:  usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { inner:         Token::lexer(source),
               offset:        0,
               cursor_column: 1,
               token_column:  1, }
    }

    /// Returns the next token of the source.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("12 +");
    /// assert_eq!(lexer.next_token(), Token::Number("12".to_string()));
    /// assert_eq!(lexer.next_token(), Token::Plus);
    /// assert_eq!(lexer.next_token(), Token::EndOfInput);
    /// assert_eq!(lexer.next_token(), Token::EndOfInput);
    /// ```
    pub fn next_token(&mut self) -> Token {
        let token = match self.inner.next() {
            Some(result) => {
                let span = self.inner.span();
                self.advance_to(span.start);
                self.token_column = self.cursor_column;
                self.advance_to(span.end);

                result.unwrap_or_else(|()| {
                          Token::Invalid(format!("Invalid character: {}", self.inner.slice()))
                      })
            },
            None => {
                self.advance_to(self.inner.source().len());
                self.token_column = self.cursor_column;
                Token::EndOfInput
            },
        };

        trace!(%token, column = self.token_column, "lexed token");
        token
    }

    /// The 1-based character column of the token most recently returned by
    /// [`Lexer::next_token`]. For [`Token::EndOfInput`] this is one past the
    /// last character of the source.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.token_column
    }

    fn advance_to(&mut self, byte_offset: usize) {
        if byte_offset > self.offset {
            let skipped = &self.inner.source()[self.offset..byte_offset];
            self.cursor_column += skipped.chars().count();
            self.offset = byte_offset;
        }
    }
}

/// Yields every token with its column, stopping before
/// [`Token::EndOfInput`].
impl Iterator for Lexer<'_> {
    type Item = (Token, usize);

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Token::EndOfInput => None,
            token => Some((token, self.column())),
        }
    }
}
