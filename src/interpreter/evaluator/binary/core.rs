use crate::{
    ast::{AstNode, BinaryOperator},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        token::Location,
        value::core::{PsType, PsValue},
    },
};

impl Context<'_> {
    /// Evaluates both operands of a binary operation, then applies it.
    ///
    /// The operands are evaluated left to right. The type each operand is
    /// expected to have depends on the operator:
    /// - `+` passes the type expected of the whole operation through, since it
    ///   may concatenate strings as well as add numbers.
    /// - `-`, `*`, `/` and the relational operators expect numbers.
    /// - `==` and `!=` expect nothing in particular.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `op`: The operator.
    /// - `right`: Right operand.
    /// - `location`: Location of the operator, for error reporting.
    /// - `expected`: The type expected of the operation's result, if any.
    pub fn eval_binary_op(&mut self,
                          left: &AstNode,
                          op: BinaryOperator,
                          right: &AstNode,
                          location: Location,
                          expected: Option<PsType>)
                          -> EvalResult<PsValue> {
        let operand_type = match op {
            BinaryOperator::Add => expected,
            BinaryOperator::Equal | BinaryOperator::NotEqual => None,
            BinaryOperator::Sub
            | BinaryOperator::Mul
            | BinaryOperator::Div
            | BinaryOperator::Less
            | BinaryOperator::Greater
            | BinaryOperator::LessEqual
            | BinaryOperator::GreaterEqual => Some(PsType::Number),
        };

        let left = self.evaluate(left, operand_type)?;
        let right = self.evaluate(right, operand_type)?;

        Self::eval_binary(op, &left, &right, location)
    }

    /// Applies a binary operator to two values.
    ///
    /// Arithmetic operators go to `eval_arithmetic`, equality and relational
    /// operators to `eval_comparison`.
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
    /// let sum = Context::eval_binary(BinaryOperator::Add, &PsValue::Number(3.0), &PsValue::Number(4.0), at);
    /// assert_eq!(sum.unwrap(), PsValue::Number(7.0));
    ///
    /// let text = Context::eval_binary(BinaryOperator::Add, &PsValue::from("a"), &PsValue::Number(1.0), at);
    /// assert_eq!(text.unwrap(), PsValue::from("a1"));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &PsValue,
                       right: &PsValue,
                       location: Location)
                       -> EvalResult<PsValue> {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };

        match op {
            Add | Sub | Mul | Div => Self::eval_arithmetic(op, left, right, location),
            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right, location)
            },
        }
    }
}
