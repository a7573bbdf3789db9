use crate::{
    ast::BinaryOperator,
    error::InterpreterError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        token::Location,
        value::{core::PsValue, type_rules::format_for_print},
    },
};

impl Context<'_> {
    /// Evaluates an arithmetic operation.
    ///
    /// `+` concatenates the printed forms of both operands when either of
    /// them is a string, and adds numbers otherwise. `-`, `*` and `/` only
    /// accept numbers. Division by zero is checked explicitly.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul` or `Div`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `location`: Source location for error reporting.
    ///
    /// # Errors
    /// - `TypeMismatch` if a non-string operation gets a non-number.
    /// - `DivisionByZero` if the divisor is zero.
    ///
    /// # Example
    /// ```
    /// use printscript::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, token::Location, value::core::PsValue},
    /// };
    ///
    /// let at = Location::new(1, 1);
    ///
    /// let quotient = Context::eval_arithmetic(BinaryOperator::Div, &PsValue::Number(3.0), &PsValue::Number(2.0), at);
    /// assert_eq!(quotient.unwrap(), PsValue::Number(1.5));
    ///
    /// let by_zero = Context::eval_arithmetic(BinaryOperator::Div, &PsValue::Number(3.0), &PsValue::Number(0.0), at);
    /// assert!(by_zero.is_err());
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &PsValue,
                           right: &PsValue,
                           location: Location)
                           -> EvalResult<PsValue> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use PsValue::{Number, Str};

        if op == Add && (matches!(left, Str(_)) || matches!(right, Str(_))) {
            return Ok(Str(format_for_print(left) + &format_for_print(right)));
        }

        let left = left.as_number(location)?;
        let right = right.as_number(location)?;

        Ok(Number(match op {
                      Add => left + right,
                      Sub => left - right,
                      Mul => left * right,
                      Div => {
                          if right == 0.0 {
                              return Err(InterpreterError::DivisionByZero { location });
                          }
                          left / right
                      },
                      _ => {
                          return Err(InterpreterError::Unsupported { details: format!("'{op}' is not an arithmetic operator"),
                                                                     location });
                      },
                  }))
    }
}
