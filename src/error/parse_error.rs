use thiserror::Error;

use crate::interpreter::token::Token;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while parsing statements and
/// expressions.
pub enum ParseError {
    /// A construct was recognized but could not be completed.
    #[error("Error at {}: Invalid syntax: {reason}. Check your input: {}",
            start_of(.tokens),
            lexemes(.tokens))]
    InvalidSyntax {
        /// The tokens of the malformed construct.
        tokens: Vec<Token>,
        /// Why the construct is malformed.
        reason: String,
    },
    /// No validator of the active grammar accepts the statement.
    #[error("Error at {}: No statement form matches: {}", start_of(.tokens), lexemes(.tokens))]
    NoValidParser {
        /// The tokens of the rejected statement; empty at end of input.
        tokens: Vec<Token>,
    },
    /// Found a token other than the one the construct requires.
    #[error("Error at {}: Unexpected token '{}', expected {expected}.",
            .token.location,
            .token.lexeme)]
    UnexpectedToken {
        /// The token encountered.
        token:    Token,
        /// A description of what was expected instead.
        expected: String,
    },
}

impl ParseError {
    /// Builds an [`ParseError::InvalidSyntax`] from a token slice.
    pub(crate) fn invalid_syntax(tokens: &[Token], reason: impl Into<String>) -> Self {
        Self::InvalidSyntax { tokens: tokens.to_vec(),
                              reason: reason.into(), }
    }

    /// Builds an [`ParseError::UnexpectedToken`].
    pub(crate) fn unexpected(token: &Token, expected: impl Into<String>) -> Self {
        Self::UnexpectedToken { token:    token.clone(),
                                expected: expected.into(), }
    }
}

fn start_of(tokens: &[Token]) -> String {
    tokens.first()
          .map_or_else(|| "end of input".to_string(), |t| t.location.to_string())
}

fn lexemes(tokens: &[Token]) -> String {
    if tokens.is_empty() {
        return "<end of input>".to_string();
    }
    tokens.iter()
          .map(|t| t.lexeme.as_str())
          .collect::<Vec<_>>()
          .join(" ")
}
