use crate::{
    error::ParseError,
    interpreter::{
        parser::core::ParseResult,
        token::{Token, TokenKind, TokenProvider},
    },
};

/// Returns `true` for tokens that can only appear at the start of a statement
/// or a block boundary. A statement scan never runs past one of them.
const fn starts_new_statement(kind: TokenKind) -> bool {
    matches!(kind,
             TokenKind::Let
             | TokenKind::Const
             | TokenKind::If
             | TokenKind::Else
             | TokenKind::LBrace
             | TokenKind::RBrace)
}

/// Finds the `;` that terminates the statement at the front of `stream`.
///
/// Only semicolons outside parentheses count. The scan gives up at the end of
/// input, at a brace, or at a keyword that begins another statement.
///
/// # Returns
/// The lookahead offset of the `;`, or `None` if the statement is not
/// terminated.
pub(in crate::interpreter::parser) fn find_statement_end(stream: &dyn TokenProvider)
                                                         -> Option<usize> {
    let mut depth = 0usize;

    for k in 0.. {
        let kind = stream.peek(k).kind;
        match kind {
            TokenKind::Eof => return None,
            _ if k > 0 && starts_new_statement(kind) => return None,
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => depth = depth.saturating_sub(1),
            TokenKind::Semicolon if depth == 0 => return Some(k),
            _ => {},
        }
    }

    None
}

/// Consumes the statement at the front of `stream` up to and including its
/// terminating `;`.
///
/// # Errors
/// Returns `InvalidSyntax` carrying the unterminated statement if no `;`
/// ends it.
pub(in crate::interpreter::parser) fn take_statement(stream: &mut dyn TokenProvider)
                                                     -> ParseResult<Vec<Token>> {
    let Some(end) = find_statement_end(stream) else {
        return Err(ParseError::invalid_syntax(&pending_statement(stream),
                                              "expected ';' at the end of the statement"));
    };

    Ok(consume_tokens(stream, end + 1))
}

/// Copies the tokens of the statement at the front of `stream` without
/// consuming them: everything up to and including the next `;`, stopping
/// early at the end of input or where another statement begins.
pub(in crate::interpreter::parser) fn pending_statement(stream: &dyn TokenProvider) -> Vec<Token> {
    let mut tokens = Vec::new();

    for k in 0.. {
        let token = stream.peek(k);
        if token.kind == TokenKind::Eof || (k > 0 && starts_new_statement(token.kind)) {
            break;
        }
        tokens.push(token.clone());
        if token.kind == TokenKind::Semicolon {
            break;
        }
    }

    tokens
}

/// Consumes `count` tokens from `stream`.
pub(in crate::interpreter::parser) fn consume_tokens(stream: &mut dyn TokenProvider,
                                                     count: usize)
                                                     -> Vec<Token> {
    (0..count).map(|_| stream.consume()).collect()
}

/// Finds the `)` matching the `(` at index `open` of `tokens`.
///
/// # Returns
/// The index of the matching `)`, or `None` if the parenthesis is never
/// closed.
pub(in crate::interpreter::parser) fn find_matching_paren(tokens: &[Token],
                                                          open: usize)
                                                          -> Option<usize> {
    let mut depth = 0usize;

    for (index, token) in tokens.iter().enumerate().skip(open) {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(index);
                }
            },
            _ => {},
        }
    }

    None
}

/// Finds the `)` matching the `(` at lookahead offset `open` of `stream`.
///
/// Works like [`find_matching_paren`] but scans the stream's lookahead until
/// the end of input.
pub(in crate::interpreter::parser) fn find_matching_paren_ahead(stream: &dyn TokenProvider,
                                                                open: usize)
                                                                -> Option<usize> {
    let mut depth = 0usize;

    for k in open.. {
        match stream.peek(k).kind {
            TokenKind::Eof => return None,
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(k);
                }
            },
            _ => {},
        }
    }

    None
}

/// Checks that the token at `index` of a statement has kind `kind`.
///
/// # Parameters
/// - `tokens`: The statement's tokens.
/// - `index`: Position of the token to check.
/// - `kind`: The required token kind.
/// - `expected`: Description of the requirement used in the error.
///
/// # Errors
/// - `UnexpectedToken` if the token has another kind.
/// - `InvalidSyntax` if the statement has no token at `index`.
pub(in crate::interpreter::parser) fn expect_kind<'t>(tokens: &'t [Token],
                                                      index: usize,
                                                      kind: TokenKind,
                                                      expected: &str)
                                                      -> ParseResult<&'t Token> {
    match tokens.get(index) {
        Some(token) if token.kind == kind => Ok(token),
        Some(token) => Err(ParseError::unexpected(token, expected)),
        None => Err(ParseError::invalid_syntax(tokens, format!("expected {expected}"))),
    }
}
