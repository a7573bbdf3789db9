use thiserror::Error;

use crate::interpreter::{token::Location, value::core::PsType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation and execution.
pub enum InterpreterError {
    /// A value had a different type than the one required.
    #[error("Error at {location}: Type mismatch: expected {expected}, found {found}.")]
    TypeMismatch {
        /// The type the operation or variable requires.
        expected: PsType,
        /// The type of the value actually supplied.
        found:    PsType,
        /// Where the mismatch occurred.
        location: Location,
    },
    /// Tried to assign to a `const` variable.
    #[error("Error at {location}: Cannot reassign const variable '{name}'.")]
    ConstReassignment {
        /// The name of the variable.
        name:     String,
        /// Where the assignment occurred.
        location: Location,
    },
    /// Tried to use a variable no enclosing scope declares.
    #[error("Error at {location}: Variable '{name}' is not declared.")]
    UndeclaredVariable {
        /// The name of the variable.
        name:     String,
        /// Where the variable was referenced.
        location: Location,
    },
    /// `readEnv` asked for a variable the environment does not define.
    #[error("Error at {location}: Environment variable '{name}' is not set.")]
    MissingEnvVar {
        /// The name of the environment variable.
        name:     String,
        /// Where `readEnv` was called.
        location: Location,
    },
    /// External text could not be converted to the expected type.
    #[error("Error at {location}: Cannot read '{raw}' as a {target}.")]
    InputParse {
        /// The raw text that failed to convert.
        raw:      String,
        /// The type the text had to be converted to.
        target:   PsType,
        /// Where the value was requested.
        location: Location,
    },
    /// Attempted division by zero.
    #[error("Error at {location}: Division by zero.")]
    DivisionByZero {
        /// Where the division occurred.
        location: Location,
    },
    /// An operation the runtime cannot perform on its arguments.
    #[error("Error at {location}: Unsupported operation: {details}.")]
    Unsupported {
        /// What was attempted.
        details:  String,
        /// Where it was attempted.
        location: Location,
    },
}
