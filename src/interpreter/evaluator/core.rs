use tracing::debug;

use crate::{
    ast::AstNode,
    error::InterpreterError,
    interpreter::{
        evaluator::scope::{VariableBinding, VariableStore},
        io::{EnvProvider, InputProvider, OutputSink},
        value::core::{PsType, PsValue},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `InterpreterError` describing the failure.
pub type EvalResult<T> = Result<T, InterpreterError>;

/// Stores the runtime evaluation context.
///
/// The context owns the scoped variable store and borrows the three I/O
/// collaborators for the duration of a program run. It is created once and
/// reused for every statement of the program, so variables declared by one
/// statement are visible to the following ones.
///
/// ## Usage
/// ```
/// use std::collections::HashMap;
///
/// use printscript::{
///     ast::{AstNode, Builtin, LiteralKind},
///     interpreter::{
///         evaluator::core::Context,
///         io::{BufferedOutput, ScriptedInput},
///         token::Location,
///     },
/// };
///
/// let mut input = ScriptedInput::default();
/// let env: HashMap<String, String> = HashMap::new();
/// let mut output = BufferedOutput::default();
/// let mut context = Context::new(&mut input, &env, &mut output);
///
/// let greeting = AstNode::Literal { kind:     LiteralKind::String,
///                                   lexeme:   "\"hello\"".to_string(),
///                                   location: Location::new(1, 9), };
/// let call = AstNode::FunctionCall { function: Builtin::Println,
///                                    argument: Box::new(greeting),
///                                    is_void:  true,
///                                    location: Location::new(1, 1), };
///
/// context.execute(&call).unwrap();
/// drop(context);
///
/// assert_eq!(output.lines(), ["hello"]);
/// ```
pub struct Context<'io> {
    pub(crate) store:  VariableStore,
    pub(crate) input:  &'io mut dyn InputProvider,
    pub(crate) env:    &'io dyn EnvProvider,
    pub(crate) output: &'io mut dyn OutputSink,
}

impl<'io> Context<'io> {
    /// Creates a context with an empty global frame around the given
    /// collaborators.
    pub fn new(input: &'io mut dyn InputProvider,
               env: &'io dyn EnvProvider,
               output: &'io mut dyn OutputSink)
               -> Self {
        Self { store: VariableStore::default(),
               input,
               env,
               output }
    }

    /// Read access to the variable store.
    #[must_use]
    pub const fn store(&self) -> &VariableStore {
        &self.store
    }

    /// Looks up the binding of `name`, innermost frame first.
    #[must_use]
    pub fn binding(&self, name: &str) -> Option<&VariableBinding> {
        self.store.lookup(name)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on node variant: literals, identifiers,
    /// unary and binary operations and value-producing builtin calls.
    ///
    /// # Parameters
    /// - `node`: Expression to evaluate.
    /// - `expected`: The type the surrounding construct requires, if any.
    ///   `readInput` and `readEnv` convert what they read into this type.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Errors
    /// Any runtime error of the expression. Statement nodes and `println`
    /// calls produce no value and fail with `Unsupported`.
    pub fn evaluate(&mut self, node: &AstNode, expected: Option<PsType>) -> EvalResult<PsValue> {
        match node {
            AstNode::Literal { kind,
                               lexeme,
                               location, } => Self::eval_literal(*kind, lexeme, *location),
            AstNode::Identifier { name, location } => self.eval_identifier(name, *location),
            AstNode::BinaryOp { left,
                                op,
                                right,
                                location, } => {
                self.eval_binary_op(left, *op, right, *location, expected)
            },
            AstNode::UnaryOp { op,
                               operand,
                               location, } => self.eval_unary_op(*op, operand, *location),
            AstNode::FunctionCall { function,
                                    argument,
                                    location,
                                    .. } if !function.is_void() => {
                self.eval_function_call(*function, argument, *location, expected)
            },
            AstNode::FunctionCall { .. }
            | AstNode::Declaration(_)
            | AstNode::DeclarationAssignment { .. }
            | AstNode::Assignment { .. }
            | AstNode::Conditional { .. } => {
                Err(InterpreterError::Unsupported { details:  format!("a {} produces no value",
                                                                      node.kind_name()),
                                                    location: node.location(), })
            },
        }
    }

    /// Executes a single statement.
    ///
    /// Handles declarations, assignments, builtin calls and conditionals.
    /// Statements change the variable store or produce output; they never
    /// yield a value.
    ///
    /// # Parameters
    /// - `node`: Statement to execute.
    ///
    /// # Errors
    /// Any runtime error of the statement. Bare expressions are not
    /// statements and fail with `Unsupported`.
    pub fn execute(&mut self, node: &AstNode) -> EvalResult<()> {
        debug!(kind = node.kind_name(), location = %node.location(), "executing statement");

        match node {
            AstNode::Declaration(declaration) => self.exec_declaration(declaration),
            AstNode::DeclarationAssignment { declaration, value } => {
                self.exec_declaration_assignment(declaration, value)
            },
            AstNode::Assignment { identifier,
                                  expression,
                                  location, } => {
                self.exec_assignment(identifier, expression, *location)
            },
            AstNode::FunctionCall { function,
                                    argument,
                                    location,
                                    .. } => self.exec_function_call(*function, argument, *location),
            AstNode::Conditional { condition,
                                   then_body,
                                   else_body,
                                   .. } => {
                self.exec_conditional(condition, then_body, else_body.as_deref())
            },
            AstNode::Literal { .. }
            | AstNode::Identifier { .. }
            | AstNode::BinaryOp { .. }
            | AstNode::UnaryOp { .. } => {
                Err(InterpreterError::Unsupported { details:  format!("a {} cannot be used as a statement",
                                                                      node.kind_name()),
                                                    location: node.location(), })
            },
        }
    }

    /// Executes statements in order, stopping at the first failure.
    ///
    /// Output written by statements before the failing one stays written.
    pub fn execute_program(&mut self, statements: &[AstNode]) -> EvalResult<()> {
        statements.iter()
                  .try_for_each(|statement| self.execute(statement))
    }
}
