use crate::{
    ast::{AstNode, Builtin},
    error::ParseError,
    interpreter::{
        parser::{
            core::ParseResult,
            expression::build_expression_in,
            utils::{find_matching_paren, find_matching_paren_ahead, pending_statement, take_statement},
        },
        token::{TokenKind, TokenProvider},
    },
};

/// Parses a builtin call used as a statement, such as `println(x);`.
///
/// Grammar: `call := builtin "(" expression ")" ";"`
///
/// Any builtin may be called as a statement; the value of `readInput` and
/// `readEnv` is then discarded.
///
/// # Returns
/// - `Ok(None)` if the statement does not start with a builtin name.
/// - `Ok(Some(node))` with a `FunctionCall` node otherwise.
///
/// # Errors
/// - `InvalidSyntax` if the name is not followed by `(`, the argument list is
///   never closed or empty, or the statement has no terminating `;`.
/// - `UnexpectedToken` if anything follows the closing `)` before the `;`.
pub(in crate::interpreter::parser) fn parse_call_statement(stream: &mut dyn TokenProvider)
                                                           -> ParseResult<Option<AstNode>> {
    let Some(function) = Builtin::from_token(stream.peek(0).kind) else {
        return Ok(None);
    };

    if stream.peek(1).kind != TokenKind::LParen {
        return Err(ParseError::invalid_syntax(&pending_statement(stream),
                                              format!("'{function}' must be followed by '('")));
    }

    if find_matching_paren_ahead(stream, 1).is_none() {
        return Err(ParseError::invalid_syntax(&pending_statement(stream), "unclosed argument list"));
    }

    let tokens = take_statement(stream)?;
    let end = tokens.len() - 1;
    let close = find_matching_paren(&tokens, 1).ok_or_else(|| {
                    ParseError::invalid_syntax(&tokens, "unclosed argument list")
                })?;
    if close + 1 != end {
        return Err(ParseError::unexpected(&tokens[close + 1], "';' after the call"));
    }

    let argument = build_expression_in(&tokens, 2..close)?;

    Ok(Some(AstNode::FunctionCall { function,
                                    argument: Box::new(argument),
                                    is_void: function.is_void(),
                                    location: tokens[0].location }))
}
