use tracing::trace;

use crate::{
    ast::{AstNode, Builtin},
    error::InterpreterError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        token::Location,
        value::{
            core::{PsType, PsValue},
            type_rules::{format_for_print, parse_raw_to},
        },
    },
};

impl Context<'_> {
    /// Evaluates a value-producing builtin call.
    ///
    /// - `readInput(prompt)` shows the printed form of `prompt` to the input
    ///   provider and converts the line it returns.
    /// - `readEnv(name)` asks the environment provider for the variable named
    ///   by the printed form of `name` and converts its value.
    ///
    /// The text read is converted into `expected`, or kept as a string when
    /// no type is expected.
    ///
    /// # Errors
    /// - `InputParse` if the text read does not denote a value of the
    ///   expected type.
    /// - `MissingEnvVar` if the environment does not define the variable.
    /// - `Unsupported` for `println`, which produces no value.
    pub fn eval_function_call(&mut self,
                              function: Builtin,
                              argument: &AstNode,
                              location: Location,
                              expected: Option<PsType>)
                              -> EvalResult<PsValue> {
        let target = expected.unwrap_or(PsType::String);

        match function {
            Builtin::ReadInput => {
                let prompt = format_for_print(&self.evaluate(argument, None)?);
                let raw = self.input.read_input(&prompt);
                trace!(%prompt, %raw, "read input");
                parse_raw_to(target, &raw, location)
            },
            Builtin::ReadEnv => {
                let name = format_for_print(&self.evaluate(argument, None)?);
                let raw = self.env
                              .get_env_variable(&name)
                              .ok_or_else(|| InterpreterError::MissingEnvVar { name: name.clone(),
                                                                               location })?;
                parse_raw_to(target, &raw, location)
            },
            Builtin::Println => {
                Err(InterpreterError::Unsupported { details: format!("'{function}' produces no value"),
                                                    location })
            },
        }
    }

    /// Executes a builtin call used as a statement.
    ///
    /// `println` prints the printed form of its argument through the output
    /// sink. The other builtins are evaluated and their value is discarded.
    pub fn exec_function_call(&mut self,
                              function: Builtin,
                              argument: &AstNode,
                              location: Location)
                              -> EvalResult<()> {
        if function.is_void() {
            let value = self.evaluate(argument, None)?;
            self.output.print(&format_for_print(&value));
            return Ok(());
        }

        self.eval_function_call(function, argument, location, None)?;
        Ok(())
    }
}
