use crate::{
    ast::{AstNode, Declaration},
    error::ParseError,
    interpreter::{
        parser::{
            core::ParseResult,
            expression::build_expression_in,
            utils::{expect_kind, take_statement},
        },
        token::{TokenKind, TokenProvider},
        value::core::PsType,
    },
};

/// Parses a variable declaration.
///
/// Syntax:
/// ```text
///     let <name>: <type>;
///     let <name>: <type> = <expression>;
///     const <name>: <type>;
///     const <name>: <type> = <expression>;
/// ```
/// `let` declares a mutable variable, `const` an immutable one. The `const`
/// forms are only recognized when `allow_const` is set.
///
/// # Parameters
/// - `stream`: Token stream positioned at the start of a statement.
/// - `allow_const`: Whether `const` declarations are part of the grammar.
///
/// # Returns
/// - `Ok(None)` if the statement does not start with a declaring keyword.
/// - `Ok(Some(node))` with a `Declaration` or `DeclarationAssignment` node.
///
/// # Errors
/// - `InvalidSyntax` if the statement has no terminating `;` or an empty
///   initializer.
/// - `UnexpectedToken` if the name, `:`, type or `=` is missing.
pub(in crate::interpreter::parser) fn parse_declaration(stream: &mut dyn TokenProvider,
                                                        allow_const: bool)
                                                        -> ParseResult<Option<AstNode>> {
    let is_mutable = match stream.peek(0).kind {
        TokenKind::Let => true,
        TokenKind::Const if allow_const => false,
        _ => return Ok(None),
    };

    let tokens = take_statement(stream)?;
    let keyword = &tokens[0];
    let name = expect_kind(&tokens, 1, TokenKind::Identifier, "a variable name")?;
    expect_kind(&tokens, 2, TokenKind::Colon, "':' after the variable name")?;

    let type_token = &tokens[3];
    let declared_type = PsType::from_token(type_token.kind).ok_or_else(|| {
                            ParseError::unexpected(type_token, "a type (number, string or boolean)")
                        })?;

    let declaration = Declaration { identifier: name.lexeme.clone(),
                                    declared_type,
                                    is_mutable,
                                    location: keyword.location };

    let after_type = &tokens[4];
    match after_type.kind {
        TokenKind::Semicolon => Ok(Some(AstNode::Declaration(declaration))),
        TokenKind::Assign => {
            let value = build_expression_in(&tokens, 5..tokens.len() - 1)?;
            Ok(Some(AstNode::DeclarationAssignment { declaration,
                                                     value: Box::new(value) }))
        },
        _ => Err(ParseError::unexpected(after_type, "'=' or ';' after the type")),
    }
}
