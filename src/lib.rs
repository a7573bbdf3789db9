//! # printscript
//!
//! printscript is a toolchain for PrintScript, a small typed scripting
//! language. It lexes source text, recognizes statements with a
//! version-specific grammar, builds expressions by precedence parsing and runs
//! the resulting syntax tree on a tree-walking interpreter with scoped,
//! type-checked variables.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Context,
        lexer::tokenize,
        parser::core::Parser,
        token::{TokenProvider, TokenStream},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the closed `AstNode` taxonomy produced by the parser
/// and consumed by the interpreter, together with the operator and builtin
/// enums the nodes refer to.
///
/// # Responsibilities
/// - Defines expression and statement nodes for all language constructs.
/// - Attaches source locations to nodes for error reporting.
/// - Exposes a generic `children` relation for tree walkers.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every phase reports failures through a closed enum; the top-level
/// [`Error`] wraps all of them for callers that drive a whole program.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, interpreter).
/// - Attaches source locations and the offending tokens for context.
/// - Integrates with `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the I/O collaborators the runtime talks to.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Language versions and the vocabulary each of them recognizes.
pub mod version;

pub use version::Version;

/// Lexes, parses and executes a PrintScript program.
///
/// Statements are parsed one at a time and executed as soon as they are
/// recognized. The first lexing, parsing or runtime error stops the run;
/// anything already written to the output sink stays written.
///
/// # Errors
/// Returns the first [`Error`] raised by any phase.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use printscript::{
///     Version,
///     interpreter::{
///         evaluator::core::Context,
///         io::{BufferedOutput, ScriptedInput},
///     },
///     run_source,
/// };
///
/// let mut input = ScriptedInput::default();
/// let env: HashMap<String, String> = HashMap::new();
/// let mut output = BufferedOutput::default();
///
/// let mut context = Context::new(&mut input, &env, &mut output);
/// let result = run_source("let x: number = 2 + 3 * 4;\nprintln(x);", Version::V1_1, &mut context);
/// assert!(result.is_ok());
/// drop(context);
///
/// assert_eq!(output.lines(), ["14"]);
/// ```
pub fn run_source(source: &str, version: Version, context: &mut Context<'_>) -> Result<(), Error> {
    let tokens = tokenize(source, version)?;
    let parser = Parser::new(version);
    let mut stream = TokenStream::new(tokens);

    let mut executed = 0usize;
    while !stream.is_at_end() {
        let statement = parser.parse(&mut stream)?;
        context.execute(&statement)?;
        executed += 1;
    }

    debug!(executed, %version, "program finished");
    Ok(())
}

/// Lexes and parses a program without executing it.
///
/// # Errors
/// Returns the first lexing or parsing error.
///
/// # Returns
/// The number of top-level statements in the program.
///
/// # Examples
/// ```
/// use printscript::{Version, validate_source};
///
/// assert_eq!(validate_source("let a: number = 1; println(a);", Version::V1_0).unwrap(), 2);
/// assert!(validate_source("if (true) { println(1); }", Version::V1_0).is_err());
/// ```
pub fn validate_source(source: &str, version: Version) -> Result<usize, Error> {
    let tokens = tokenize(source, version)?;
    let parser = Parser::new(version);
    let mut stream = TokenStream::new(tokens);

    Ok(parser.parse_program(&mut stream)?.len())
}
