use crate::{
    ast::AstNode,
    error::ParseError,
    interpreter::{
        parser::{
            core::ParseResult,
            expression::build_expression,
            statement::Grammar,
            utils::{consume_tokens, find_matching_paren_ahead},
        },
        token::{TokenKind, TokenProvider},
    },
};

/// Parses an `if` statement with an optional `else` block.
///
/// Syntax:
/// ```text
///     if (<condition>) { <statement>* }
///     if (<condition>) { <statement>* } else { <statement>* }
/// ```
/// Statements inside the blocks are parsed with `grammar`, so blocks may
/// contain any statement of the language, nested `if`s included.
///
/// # Parameters
/// - `stream`: Token stream positioned at the start of a statement.
/// - `grammar`: The grammar used for the statements of both blocks.
///
/// # Returns
/// - `Ok(None)` if the statement does not start with `if`.
/// - `Ok(Some(node))` with a `Conditional` node otherwise.
///
/// # Errors
/// - `UnexpectedToken` if `(` does not follow `if`, or a block does not
///   start with `{`.
/// - `InvalidSyntax` if the condition is unclosed or empty, or the input ends
///   before a block's `}`.
/// - Any error of the condition or of a statement inside the blocks.
pub(in crate::interpreter::parser) fn parse_conditional(stream: &mut dyn TokenProvider,
                                                        grammar: &Grammar)
                                                        -> ParseResult<Option<AstNode>> {
    if stream.peek(0).kind != TokenKind::If {
        return Ok(None);
    }
    let if_token = stream.consume();

    if stream.peek(0).kind != TokenKind::LParen {
        return Err(ParseError::unexpected(stream.peek(0), "'(' after 'if'"));
    }
    let Some(close) = find_matching_paren_ahead(stream, 0) else {
        let open = stream.consume();
        return Err(ParseError::invalid_syntax(&[if_token, open], "unclosed if condition"));
    };

    let mut parenthesized = consume_tokens(stream, close + 1);
    parenthesized.pop();
    let condition_tokens = &parenthesized[1..];
    if condition_tokens.is_empty() {
        return Err(ParseError::invalid_syntax(&parenthesized, "empty if condition"));
    }
    let condition = build_expression(condition_tokens)?;

    let then_body = parse_block(stream, grammar)?;
    let else_body = if stream.peek(0).kind == TokenKind::Else {
        stream.consume();
        Some(parse_block(stream, grammar)?)
    } else {
        None
    };

    Ok(Some(AstNode::Conditional { condition: Box::new(condition),
                                   then_body,
                                   else_body,
                                   location: if_token.location }))
}

/// Parses a brace-delimited block of statements.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `stream`: Token stream positioned at the opening `{`.
/// - `grammar`: The grammar used for the block's statements.
///
/// # Returns
/// The block's statements in source order.
fn parse_block(stream: &mut dyn TokenProvider, grammar: &Grammar) -> ParseResult<Vec<AstNode>> {
    let open = stream.peek(0);
    if open.kind != TokenKind::LBrace {
        return Err(ParseError::unexpected(open, "'{' to open a block"));
    }
    stream.consume();

    let mut statements = Vec::new();
    loop {
        match stream.peek(0).kind {
            TokenKind::RBrace => {
                stream.consume();
                return Ok(statements);
            },
            TokenKind::Eof => {
                let last = stream.previous().unwrap_or_else(|| stream.peek(0)).clone();
                return Err(ParseError::invalid_syntax(&[last], "missing '}' at the end of the block"));
            },
            _ => statements.push(grammar.parse_statement(stream)?),
        }
    }
}
