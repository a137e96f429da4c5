#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A character outside the token alphabet was reached as an operand.
    InvalidCharacter {
        /// Description of the character, as produced by the lexer.
        description: String,
        /// The source column where the error occurred.
        column:      usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source column where the error occurred.
        column: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The token found instead.
        found:  String,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl ParseError {
    /// The source column the error points at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::InvalidCharacter { column, .. }
            | Self::UnexpectedToken { column, .. }
            | Self::UnexpectedEndOfInput { column }
            | Self::ExpectedClosingParen { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { description, column } => {
                write!(f, "Error at column {column}: {description}.")
            },

            Self::UnexpectedToken { token, column } => write!(f,
                                                              "Error at column {column}: Expected a number or '(', found {token}."),

            Self::UnexpectedEndOfInput { column } => {
                write!(f, "Error at column {column}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { found, column } => write!(f,
                                                                   "Error at column {column}: Expected closing parenthesis ')' but found {found}."),
        }
    }
}

impl std::error::Error for ParseError {}
