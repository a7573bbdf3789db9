use logos::Logos;
use tracing::trace;

use crate::{
    Version,
    error::LexError,
    interpreter::token::{Location, Token, TokenKind},
};

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset at which it starts so every
/// token can be given a line and column.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Splits source text into located tokens.
///
/// Whitespace, line breaks and `//` comments are skipped. Keywords that
/// `version` does not recognize are returned as identifiers, so a version 1.0
/// program may use `if` or `const` as variable names.
///
/// # Errors
/// Returns [`LexError::UnexpectedCharacter`] for input that starts no token.
///
/// # Example
/// ```
/// use printscript::{Version, interpreter::{lexer::tokenize, token::TokenKind}};
///
/// let tokens = tokenize("const x: boolean = true;", Version::V1_1).unwrap();
/// assert_eq!(tokens[0].kind, TokenKind::Const);
/// assert_eq!(tokens[1].lexeme, "x");
///
/// let tokens = tokenize("const x: boolean = true;", Version::V1_0).unwrap();
/// assert_eq!(tokens[0].kind, TokenKind::Identifier);
/// ```
pub fn tokenize(source: &str, version: Version) -> Result<Vec<Token>, LexError> {
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras::default());
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let location = Location::new(lexer.extras.line,
                                     lexer.span().start - lexer.extras.line_start + 1);
        let lexeme = lexer.slice().to_string();

        match result {
            Ok(kind) => {
                let kind = if version.recognizes(kind) {
                    kind
                } else {
                    TokenKind::Identifier
                };
                tokens.push(Token { kind,
                                    lexeme,
                                    location });
            },
            Err(()) => return Err(LexError::UnexpectedCharacter { lexeme, location }),
        }
    }

    trace!(count = tokens.len(), %version, "tokenized source");
    Ok(tokens)
}
