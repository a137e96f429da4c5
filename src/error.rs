/// Parsing errors.
///
/// Defines the errors that can occur while turning source text into an
/// expression tree: characters outside the token alphabet, tokens in the
/// wrong place, a missing closing parenthesis, or leftover input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors that can be raised while evaluating an expression
/// tree. Division by zero is the only one.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
