use tracing::debug;

use crate::{
    Version,
    ast::AstNode,
    error::ParseError,
    interpreter::{
        parser::{
            assignment::parse_assignment,
            call::parse_call_statement,
            conditional::parse_conditional,
            core::ParseResult,
            declaration::parse_declaration,
            utils::pending_statement,
        },
        token::TokenProvider,
    },
};

/// Recognizes and builds one form of statement.
///
/// A validator looks at the front of the token stream and answers in one of
/// three ways:
/// - `Ok(None)`: the statement is not of this form; nothing was consumed.
/// - `Ok(Some(node))`: the statement was recognized and fully consumed.
/// - `Err(error)`: the statement is of this form but malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// `let x: T;`, `let x: T = expr;` and, when allowed, the `const` forms.
    Declaration {
        /// Whether `const` declarations are part of the language.
        allow_const: bool,
    },
    /// `x = expr;`
    Assignment,
    /// `builtin(expr);`
    FunctionCall,
    /// `if (cond) { ... } else { ... }`
    Conditional,
}

impl Validator {
    /// Tries to recognize the statement at the front of `stream`.
    ///
    /// # Parameters
    /// - `stream`: Token stream positioned at the start of a statement.
    /// - `grammar`: The grammar this validator runs in. Block statements parse
    ///   their bodies through it.
    pub fn validate_and_build(self,
                              stream: &mut dyn TokenProvider,
                              grammar: &Grammar)
                              -> ParseResult<Option<AstNode>> {
        match self {
            Self::Declaration { allow_const } => parse_declaration(stream, allow_const),
            Self::Assignment => parse_assignment(stream),
            Self::FunctionCall => parse_call_statement(stream),
            Self::Conditional => parse_conditional(stream, grammar),
        }
    }
}

/// The ordered list of statement validators of one language version.
///
/// Validators are tried in order and the first one that recognizes the
/// statement builds it.
///
/// # Example
/// ```
/// use printscript::{Version, interpreter::parser::statement::{Grammar, Validator}};
///
/// let grammar = Grammar::for_version(Version::V1_0);
/// assert_eq!(grammar.validators(),
///            [Validator::Declaration { allow_const: false },
///             Validator::Assignment,
///             Validator::FunctionCall]);
/// assert_eq!(Grammar::for_version(Version::V1_1).validators().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    version:    Version,
    validators: Vec<Validator>,
}

impl Grammar {
    /// Builds the grammar of `version`.
    #[must_use]
    pub fn for_version(version: Version) -> Self {
        let validators = match version {
            Version::V1_0 => vec![Validator::Declaration { allow_const: false },
                                  Validator::Assignment,
                                  Validator::FunctionCall],
            Version::V1_1 => vec![Validator::Declaration { allow_const: true },
                                  Validator::Assignment,
                                  Validator::FunctionCall,
                                  Validator::Conditional],
        };

        Self { version, validators }
    }

    /// The language version this grammar implements.
    #[must_use]
    pub const fn version(&self) -> Version {
        self.version
    }

    /// The validators in the order they are tried.
    #[must_use]
    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// Parses the statement at the front of `stream` with the first validator
    /// that recognizes it.
    ///
    /// # Errors
    /// - `NoValidParser` without tokens if the stream is already at its end.
    /// - `NoValidParser` carrying the statement's tokens if no validator
    ///   recognizes it.
    /// - Any error raised by the validator that recognized the statement.
    pub fn parse_statement(&self, stream: &mut dyn TokenProvider) -> ParseResult<AstNode> {
        if stream.is_at_end() {
            return Err(ParseError::NoValidParser { tokens: Vec::new() });
        }

        for validator in &self.validators {
            if let Some(node) = validator.validate_and_build(stream, self)? {
                debug!(kind = node.kind_name(), location = %node.location(), "parsed statement");
                return Ok(node);
            }
        }

        Err(ParseError::NoValidParser { tokens: pending_statement(stream) })
    }
}
