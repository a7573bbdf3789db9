use crate::{
    ast::AstNode,
    interpreter::{
        parser::{core::ParseResult, expression::build_expression_in, utils::take_statement},
        token::{TokenKind, TokenProvider},
    },
};

/// Parses an assignment to an existing variable.
///
/// Grammar: `assignment := identifier "=" expression ";"`
///
/// # Returns
/// - `Ok(None)` if the statement does not start with `identifier =`.
/// - `Ok(Some(node))` with an `Assignment` node otherwise.
///
/// # Errors
/// `InvalidSyntax` if the statement has no terminating `;` or nothing is
/// assigned, and any error of the assigned expression.
pub(in crate::interpreter::parser) fn parse_assignment(stream: &mut dyn TokenProvider)
                                                       -> ParseResult<Option<AstNode>> {
    if stream.peek(0).kind != TokenKind::Identifier || stream.peek(1).kind != TokenKind::Assign {
        return Ok(None);
    }

    let tokens = take_statement(stream)?;
    let target = &tokens[0];
    let expression = build_expression_in(&tokens, 2..tokens.len() - 1)?;

    Ok(Some(AstNode::Assignment { identifier: target.lexeme.clone(),
                                  expression: Box::new(expression),
                                  location:   target.location, }))
}
