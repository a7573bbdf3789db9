use crate::{
    ast::BinaryOperator,
    error::InterpreterError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        token::Location,
        value::core::PsValue,
    },
};

impl Context<'_> {
    /// Evaluates a comparison of the form `PsValue <Operator> PsValue`.
    ///
    /// `==` compares values structurally and is `false` for values of
    /// different types; `!=` is its negation. The relational operators
    /// require both operands to be numbers.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `location`: Source location for error reporting.
    ///
    /// # Returns
    /// A boolean value.
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
    /// let less = Context::eval_comparison(BinaryOperator::Less, &PsValue::Number(3.0), &PsValue::Number(5.0), at);
    /// assert_eq!(less.unwrap(), PsValue::Bool(true));
    ///
    /// let mixed = Context::eval_comparison(BinaryOperator::Equal, &PsValue::Number(1.0), &PsValue::from("1"), at);
    /// assert_eq!(mixed.unwrap(), PsValue::Bool(false));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &PsValue,
                           right: &PsValue,
                           location: Location)
                           -> EvalResult<PsValue> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let result = match op {
            Equal => left == right,
            NotEqual => left != right,
            Less | Greater | LessEqual | GreaterEqual => {
                let left = left.as_number(location)?;
                let right = right.as_number(location)?;
                match op {
                    Less => left < right,
                    Greater => left > right,
                    LessEqual => left <= right,
                    _ => left >= right,
                }
            },
            _ => {
                return Err(InterpreterError::Unsupported { details: format!("'{op}' is not a comparison operator"),
                                                           location });
            },
        };

        Ok(PsValue::Bool(result))
    }
}
