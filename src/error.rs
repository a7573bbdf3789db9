use thiserror::Error;

/// Lexing errors.
///
/// Raised while turning source text into tokens, before any statement is
/// recognized.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while recognizing statements and
/// building expressions: malformed constructs, unexpected tokens and
/// statements no validator of the active grammar accepts.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include type mismatches, const reassignment, undeclared
/// variables, failed input conversions and division by zero.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::InterpreterError;

/// Any error produced while running a whole program.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The source text could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// A statement could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A statement failed while executing.
    #[error(transparent)]
    Runtime(#[from] InterpreterError),
}
