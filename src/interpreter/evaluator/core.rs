use tracing::trace;

use crate::{ast::Expr, error::RuntimeError, interpreter::evaluator::binary::eval_binary};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns its value.
///
/// Operands are evaluated before their operator, left before right, and each
/// node exactly once. The first error aborts evaluation.
///
/// # Errors
/// Returns `DivisionByZero` if any `/` has a right operand equal to zero.
///
/// # Example
/// ```
/// use tally::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::core::evaluate,
/// };
///
/// let tree = Expr::binary(Expr::Number { value: 6.0, column: 1 },
///                         BinaryOperator::Div,
///                         Expr::Number { value: 4.0, column: 5 },
///                         3);
/// assert_eq!(evaluate(&tree).unwrap(), 1.5);
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Number { value, .. } => Ok(*value),
        Expr::BinaryOp { left,
                         op,
                         right,
                         column, } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            let value = eval_binary(*op, left, right, *column)?;
            trace!(%left, %op, %right, %value, "evaluated binary operation");
            Ok(value)
        },
    }
}
