use tracing::debug;

use crate::{
    Version,
    ast::AstNode,
    error::ParseError,
    interpreter::{parser::statement::Grammar, token::TokenProvider},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses PrintScript statements for one language version.
///
/// The parser owns the version's [`Grammar`] and is otherwise stateless, so
/// it can be reused for any number of token streams.
#[derive(Debug, Clone)]
pub struct Parser {
    grammar: Grammar,
}

impl Parser {
    /// Creates a parser for `version`.
    #[must_use]
    pub fn new(version: Version) -> Self {
        Self { grammar: Grammar::for_version(version) }
    }

    /// Parses the next statement of `stream`.
    ///
    /// On success exactly the statement's tokens, including its terminating
    /// `;` or closing `}`, have been consumed.
    ///
    /// # Parameters
    /// - `stream`: Token stream positioned at the start of a statement.
    ///
    /// # Returns
    /// The statement's AST node.
    ///
    /// # Errors
    /// - `NoValidParser` if the stream is empty or no statement form matches.
    /// - `InvalidSyntax` or `UnexpectedToken` if a statement form matched but
    ///   the statement is malformed.
    ///
    /// # Example
    /// ```
    /// use printscript::{
    ///     Version,
    ///     ast::AstNode,
    ///     interpreter::{lexer::tokenize, parser::core::Parser, token::{TokenProvider, TokenStream}},
    /// };
    ///
    /// let tokens = tokenize("x = 1; println(x);", Version::V1_1).unwrap();
    /// let mut stream = TokenStream::new(tokens);
    /// let parser = Parser::new(Version::V1_1);
    ///
    /// assert!(matches!(parser.parse(&mut stream).unwrap(), AstNode::Assignment { .. }));
    /// assert_eq!(stream.position(), 4);
    /// ```
    pub fn parse(&self, stream: &mut dyn TokenProvider) -> ParseResult<AstNode> {
        self.grammar.parse_statement(stream)
    }

    /// Parses every remaining statement of `stream`.
    ///
    /// # Errors
    /// Stops at and returns the first parse error.
    pub fn parse_program(&self, stream: &mut dyn TokenProvider) -> ParseResult<Vec<AstNode>> {
        let mut statements = Vec::new();
        while !stream.is_at_end() {
            statements.push(self.parse(stream)?);
        }

        debug!(count = statements.len(), version = %self.grammar.version(), "parsed program");
        Ok(statements)
    }
}
