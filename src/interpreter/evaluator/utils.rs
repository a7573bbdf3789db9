use crate::{
    ast::LiteralKind,
    error::InterpreterError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        token::Location,
        value::core::PsValue,
    },
};

impl Context<'_> {
    /// Converts a literal's source text into a value.
    ///
    /// Number literals are parsed as `f64`, string literals lose their
    /// surrounding quotes and boolean literals must read `true` or `false`.
    ///
    /// # Parameters
    /// - `kind`: The kind of literal.
    /// - `lexeme`: The literal's source text.
    /// - `location`: Source location for error reporting.
    ///
    /// # Errors
    /// `Unsupported` if the text is not a well-formed literal of its kind.
    ///
    /// # Example
    /// ```
    /// use printscript::{
    ///     ast::LiteralKind,
    ///     interpreter::{evaluator::core::Context, token::Location, value::core::PsValue},
    /// };
    ///
    /// let at = Location::new(1, 1);
    ///
    /// assert_eq!(Context::eval_literal(LiteralKind::Number, "2.5", at).unwrap(),
    ///            PsValue::Number(2.5));
    /// assert_eq!(Context::eval_literal(LiteralKind::String, "'hi'", at).unwrap(),
    ///            PsValue::Str("hi".to_string()));
    /// assert!(Context::eval_literal(LiteralKind::Boolean, "yes", at).is_err());
    /// ```
    pub fn eval_literal(kind: LiteralKind, lexeme: &str, location: Location) -> EvalResult<PsValue> {
        let malformed = || {
            let kind_name = match kind {
                LiteralKind::Number => "number",
                LiteralKind::String => "string",
                LiteralKind::Boolean => "boolean",
            };
            InterpreterError::Unsupported { details: format!("malformed {kind_name} literal '{lexeme}'"),
                                            location }
        };

        match kind {
            LiteralKind::Number => lexeme.parse::<f64>()
                                         .map(PsValue::Number)
                                         .map_err(|_| malformed()),
            LiteralKind::String => {
                let text = lexeme.strip_prefix(['"', '\''])
                                 .and_then(|rest| rest.strip_suffix(['"', '\'']))
                                 .unwrap_or(lexeme);
                Ok(PsValue::Str(text.to_string()))
            },
            LiteralKind::Boolean => match lexeme {
                "true" => Ok(PsValue::Bool(true)),
                "false" => Ok(PsValue::Bool(false)),
                _ => Err(malformed()),
            },
        }
    }

    /// Reads the current value of a variable.
    ///
    /// Lookup starts at the innermost frame and proceeds outward.
    ///
    /// # Errors
    /// `UndeclaredVariable` if no active frame declares `name`.
    pub fn eval_identifier(&self, name: &str, location: Location) -> EvalResult<PsValue> {
        self.store
            .lookup(name)
            .map(|binding| binding.value.clone())
            .ok_or_else(|| InterpreterError::UndeclaredVariable { name: name.to_string(),
                                                                  location })
    }
}
