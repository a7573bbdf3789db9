use crate::{
    ast::{AstNode, UnaryOperator},
    error::InterpreterError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        token::Location,
        value::core::{PsType, PsValue},
    },
};

impl Context<'_> {
    /// Evaluates a unary operation.
    ///
    /// Only negation is evaluated: its operand is evaluated expecting a number
    /// and negated. Unary plus is accepted by the parser but has no runtime
    /// meaning.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `operand`: The operand expression.
    /// - `location`: Location of the operator, for error reporting.
    ///
    /// # Errors
    /// - `Unsupported` for unary plus.
    /// - `TypeMismatch` if the operand is not a number.
    pub fn eval_unary_op(&mut self,
                         op: UnaryOperator,
                         operand: &AstNode,
                         location: Location)
                         -> EvalResult<PsValue> {
        match op {
            UnaryOperator::Minus => {
                let value = self.evaluate(operand, Some(PsType::Number))?;
                Ok(PsValue::Number(-value.as_number(operand.location())?))
            },
            UnaryOperator::Plus => {
                Err(InterpreterError::Unsupported { details: "unary '+' is not supported".to_string(),
                                                    location })
            },
        }
    }
}
