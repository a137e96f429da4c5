/// Core evaluation logic.
///
/// Walks the expression tree in post-order and propagates the first error.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the four arithmetic operators, including the division by zero
/// check.
pub mod binary;
