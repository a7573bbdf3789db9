use std::ops::Range;

use tracing::trace;

use crate::{
    ast::{AstNode, BinaryOperator, Builtin, LiteralKind, UnaryOperator},
    error::ParseError,
    interpreter::{
        parser::{core::ParseResult, utils::find_matching_paren},
        token::{Token, TokenKind},
    },
};

/// An entry of the reverse polish notation queue.
///
/// Builtin calls and leaves are built while converting to RPN, so the queue
/// holds finished operand nodes next to the operator tokens still to apply.
#[derive(Debug, Clone)]
enum RpnItem {
    Operand(AstNode),
    Operator(Token),
}

/// Builds an expression tree from the tokens of one expression.
///
/// The tokens are first reordered into reverse polish notation with the
/// Shunting-Yard algorithm, using the precedence levels
/// `* /` > `+ -` > `< <= > >=` > `== !=`, all left associative. Parentheses
/// override precedence. The queue is then reduced on an operand stack: an
/// operator finding two operands becomes a binary operation, an operator
/// finding a single operand becomes a unary one.
///
/// A builtin call followed by `(` is an atomic operand whose argument is
/// built recursively.
///
/// # Parameters
/// - `tokens`: The expression's tokens, without any terminating `;`.
///
/// # Returns
/// The root node of the expression.
///
/// # Errors
/// - `InvalidSyntax` for an empty slice, unbalanced parentheses, missing or
///   dangling operands, a non-sign operator used as unary, a builtin not
///   followed by `(` and a `println` call used as a value.
/// - `UnexpectedToken` for a token that cannot be an operand.
///
/// # Example
/// ```
/// use printscript::{
///     Version,
///     ast::{AstNode, BinaryOperator},
///     interpreter::{lexer::tokenize, parser::expression::build_expression},
/// };
///
/// let tokens = tokenize("2 + 3 * 4", Version::V1_1).unwrap();
/// let AstNode::BinaryOp { op, right, .. } = build_expression(&tokens).unwrap() else {
///     panic!("expected a binary operation");
/// };
///
/// assert_eq!(op, BinaryOperator::Add);
/// assert!(matches!(*right, AstNode::BinaryOp { op: BinaryOperator::Mul, .. }));
/// ```
pub fn build_expression(tokens: &[Token]) -> ParseResult<AstNode> {
    if tokens.is_empty() {
        return Err(ParseError::invalid_syntax(tokens, "expected an expression"));
    }

    let queue = to_rpn(tokens)?;
    trace!(rpn = %describe(&queue), "converted expression to RPN");

    reduce(queue, tokens)
}

/// Builds the expression occupying `range` of a statement's tokens.
///
/// An empty range is reported against the whole statement, so the error
/// points at where the statement starts.
///
/// # Errors
/// `InvalidSyntax` carrying `statement` if `range` is empty, and any error of
/// [`build_expression`].
pub(in crate::interpreter::parser) fn build_expression_in(statement: &[Token],
                                                          range: Range<usize>)
                                                          -> ParseResult<AstNode> {
    if range.is_empty() {
        return Err(ParseError::invalid_syntax(statement, "expected an expression"));
    }

    build_expression(&statement[range])
}

/// Reorders `tokens` into reverse polish notation.
fn to_rpn(tokens: &[Token]) -> ParseResult<Vec<RpnItem>> {
    let mut queue = Vec::new();
    let mut operators: Vec<&Token> = Vec::new();
    let mut index = 0;

    while let Some(token) = tokens.get(index) {
        match token.kind {
            kind if kind.is_builtin_call() => {
                let (call, next) = build_call(tokens, index)?;
                queue.push(RpnItem::Operand(call));
                index = next;
                continue;
            },
            TokenKind::LParen => operators.push(token),
            TokenKind::RParen => loop {
                match operators.pop() {
                    Some(open) if open.kind == TokenKind::LParen => break,
                    Some(operator) => queue.push(RpnItem::Operator(operator.clone())),
                    None => return Err(ParseError::invalid_syntax(tokens, "unmatched ')'")),
                }
            },
            kind if BinaryOperator::from_token(kind).is_some() => {
                let level = precedence(kind);
                while operators.last().is_some_and(|top| {
                                                  top.kind != TokenKind::LParen
                                                  && precedence(top.kind) >= level
                                              })
                {
                    if let Some(top) = operators.pop() {
                        queue.push(RpnItem::Operator(top.clone()));
                    }
                }
                operators.push(token);
            },
            _ => queue.push(RpnItem::Operand(build_leaf(token)?)),
        }
        index += 1;
    }

    while let Some(operator) = operators.pop() {
        if operator.kind == TokenKind::LParen {
            return Err(ParseError::invalid_syntax(tokens, "unclosed '('"));
        }
        queue.push(RpnItem::Operator(operator.clone()));
    }

    Ok(queue)
}

/// Reduces an RPN queue to a single expression tree.
fn reduce(queue: Vec<RpnItem>, tokens: &[Token]) -> ParseResult<AstNode> {
    let mut operands: Vec<AstNode> = Vec::new();

    for item in queue {
        match item {
            RpnItem::Operand(node) => operands.push(node),
            RpnItem::Operator(token) => {
                let Some(right) = operands.pop() else {
                    return Err(ParseError::invalid_syntax(tokens,
                                                          format!("operator '{}' has no operand",
                                                                  token.lexeme)));
                };
                let node = match operands.pop() {
                    Some(left) => binary_node(left, &token, right, tokens)?,
                    None => unary_node(&token, right, tokens)?,
                };
                operands.push(node);
            },
        }
    }

    match (operands.pop(), operands.is_empty()) {
        (Some(root), true) => Ok(root),
        _ => Err(ParseError::invalid_syntax(tokens, "operands without an operator between them")),
    }
}

fn binary_node(left: AstNode, token: &Token, right: AstNode, tokens: &[Token]) -> ParseResult<AstNode> {
    let op = BinaryOperator::from_token(token.kind).ok_or_else(|| {
                 ParseError::invalid_syntax(tokens, format!("'{}' is not a binary operator", token.lexeme))
             })?;

    Ok(AstNode::BinaryOp { left: Box::new(left),
                           op,
                           right: Box::new(right),
                           location: token.location })
}

fn unary_node(token: &Token, operand: AstNode, tokens: &[Token]) -> ParseResult<AstNode> {
    let op = UnaryOperator::from_token(token.kind).ok_or_else(|| {
                 ParseError::invalid_syntax(tokens,
                                            format!("'{}' cannot be used as a unary operator",
                                                    token.lexeme))
             })?;

    Ok(AstNode::UnaryOp { op,
                          operand: Box::new(operand),
                          location: token.location })
}

/// Builds the builtin call starting at `tokens[start]`.
///
/// # Returns
/// The call node and the index of the first token after its closing `)`.
fn build_call(tokens: &[Token], start: usize) -> ParseResult<(AstNode, usize)> {
    let token = &tokens[start];
    let function = Builtin::from_token(token.kind).ok_or_else(|| ParseError::unexpected(token, "a builtin function"))?;

    if tokens.get(start + 1).map(|t| t.kind) != Some(TokenKind::LParen) {
        return Err(ParseError::invalid_syntax(&tokens[start..=start],
                                              format!("'{function}' must be followed by '('")));
    }
    if function.is_void() {
        return Err(ParseError::invalid_syntax(&tokens[start..],
                                              format!("'{function}' produces no value and cannot be used in an expression")));
    }

    let close = find_matching_paren(tokens, start + 1).ok_or_else(|| {
                    ParseError::invalid_syntax(&tokens[start..], "unclosed argument list")
                })?;
    let argument = build_expression_in(&tokens[start..=close], 2..close - start)?;

    let call = AstNode::FunctionCall { function,
                                       argument: Box::new(argument),
                                       is_void: false,
                                       location: token.location };
    Ok((call, close + 1))
}

/// Builds a leaf node from a literal or identifier token.
fn build_leaf(token: &Token) -> ParseResult<AstNode> {
    let kind = match token.kind {
        TokenKind::NumberLiteral => LiteralKind::Number,
        TokenKind::StringLiteral => LiteralKind::String,
        TokenKind::BooleanLiteral => LiteralKind::Boolean,
        TokenKind::Identifier => {
            return Ok(AstNode::Identifier { name:     token.lexeme.clone(),
                                            location: token.location, });
        },
        _ => return Err(ParseError::unexpected(token, "an expression operand")),
    };

    Ok(AstNode::Literal { kind,
                          lexeme: token.lexeme.clone(),
                          location: token.location })
}

fn precedence(kind: TokenKind) -> u8 {
    BinaryOperator::from_token(kind).map_or(0, BinaryOperator::precedence)
}

fn describe(queue: &[RpnItem]) -> String {
    queue.iter()
         .map(|item| match item {
             RpnItem::Operand(node) => node.kind_name().to_string(),
             RpnItem::Operator(token) => token.lexeme.clone(),
         })
         .collect::<Vec<_>>()
         .join(" ")
}
