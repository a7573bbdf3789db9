use thiserror::Error;

use crate::interpreter::token::Location;

/// Represents all errors that can occur during lexing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character sequence that starts no known token.
    #[error("Error at {location}: Unexpected character '{lexeme}'.")]
    UnexpectedCharacter {
        /// The offending source text.
        lexeme:   String,
        /// Where the text starts.
        location: Location,
    },
}
