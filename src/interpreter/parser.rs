/// Parser state and the top-level entry points.
///
/// Holds the lexer and the one-token lookahead, and checks that nothing is
/// left over after a complete expression.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two precedence levels, `+ -` and `* /`, as
/// left-associative folds.
pub mod binary;

/// Factor parsing: numbers and parenthesized groups.
pub mod factor;
