use crate::{
    ast::{AstNode, Declaration},
    error::InterpreterError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            scope::VariableBinding,
        },
        token::Location,
        value::{
            core::{PsType, PsValue},
            type_rules::ensure_assignable,
        },
    },
};

impl Context<'_> {
    /// Declares a variable holding the zero value of its type (`0`, `""` or
    /// `false`).
    ///
    /// The binding goes into the innermost frame; a variable of the same name
    /// declared earlier in that frame is replaced.
    pub fn exec_declaration(&mut self, declaration: &Declaration) -> EvalResult<()> {
        let value = declaration.declared_type.zero_value();
        self.bind(declaration, value)
    }

    /// Declares a variable and initializes it with the value of `value`.
    ///
    /// The initializer is evaluated expecting the declared type.
    ///
    /// # Errors
    /// `TypeMismatch` if the initializer has another type than the declared
    /// one, and any error of the initializer.
    pub fn exec_declaration_assignment(&mut self,
                                       declaration: &Declaration,
                                       value: &AstNode)
                                       -> EvalResult<()> {
        let value = self.evaluate(value, Some(declaration.declared_type))?;
        self.bind(declaration, value)
    }

    fn bind(&mut self, declaration: &Declaration, value: PsValue) -> EvalResult<()> {
        ensure_assignable(declaration.declared_type, &value, declaration.location)?;

        self.store.declare(VariableBinding { name: declaration.identifier.clone(),
                                             declared_type: declaration.declared_type,
                                             value,
                                             is_mutable: declaration.is_mutable });
        Ok(())
    }

    /// Assigns a new value to an existing variable.
    ///
    /// The variable is looked up from the innermost frame outward, the new
    /// value is evaluated expecting the variable's type and written into the
    /// frame that declares the variable.
    ///
    /// # Errors
    /// - `UndeclaredVariable` if no active frame declares `name`.
    /// - `ConstReassignment` if the variable is a `const`.
    /// - `TypeMismatch` if the value has another type than the variable.
    pub fn exec_assignment(&mut self,
                           name: &str,
                           expression: &AstNode,
                           location: Location)
                           -> EvalResult<()> {
        let binding = self.store
                          .lookup(name)
                          .ok_or_else(|| InterpreterError::UndeclaredVariable { name: name.to_string(),
                                                                                location })?;
        if !binding.is_mutable {
            return Err(InterpreterError::ConstReassignment { name: name.to_string(),
                                                             location });
        }
        let declared_type = binding.declared_type;

        let value = self.evaluate(expression, Some(declared_type))?;
        ensure_assignable(declared_type, &value, location)?;

        self.store.assign(name, value);
        Ok(())
    }

    /// Runs one branch of an `if` statement.
    ///
    /// The condition must evaluate to a boolean. The chosen block runs in a
    /// fresh frame that is popped when the block ends, whether it completes
    /// or fails.
    ///
    /// # Errors
    /// `TypeMismatch` for a non-boolean condition, and the first error of the
    /// executed block.
    pub fn exec_conditional(&mut self,
                            condition: &AstNode,
                            then_body: &[AstNode],
                            else_body: Option<&[AstNode]>)
                            -> EvalResult<()> {
        let holds = self.evaluate(condition, Some(PsType::Boolean))?
                        .as_bool(condition.location())?;

        match (holds, else_body) {
            (true, _) => self.exec_block(then_body),
            (false, Some(else_body)) => self.exec_block(else_body),
            (false, None) => Ok(()),
        }
    }

    /// Executes statements in a new frame, stopping at the first failure.
    pub fn exec_block(&mut self, statements: &[AstNode]) -> EvalResult<()> {
        let mut scope = self.scoped();
        statements.iter()
                  .try_for_each(|statement| scope.execute(statement))
    }
}
