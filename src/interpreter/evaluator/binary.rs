use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Applies a binary operator to two evaluated operands.
///
/// Division checks its right operand against zero exactly, with no
/// tolerance; both `0.0` and `-0.0` are rejected.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `column`: Column of the operator, for error reporting.
///
/// # Example
/// ```
/// use tally::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Sub, 10.0, 4.0, 4).unwrap(), 6.0);
/// assert!(eval_binary(BinaryOperator::Div, 1.0, 0.0, 3).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64, column: usize) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    Ok(match op {
           Add => left + right,
           Sub => left - right,
           Mul => left * right,
           Div => {
               if right == 0.0 {
                   return Err(RuntimeError::DivisionByZero { column });
               }
               left / right
           },
       })
}
