/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates expressions and executes
/// statements, checks types, manages scoped variable state and talks to the
/// injected I/O collaborators. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates every expression node and executes every statement node.
/// - Keeps the frame stack balanced on every exit path.
/// - Reports runtime errors such as type mismatches or const reassignment.
pub mod evaluator;
/// The collaborators the runtime uses for input, environment and output.
///
/// Standard-stream implementations are used by the CLI; in-memory ones make
/// runs reproducible in tests and embedders.
pub mod io;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens for keywords,
/// identifiers, literals, operators and delimiters, each with its source
/// location. Keywords unknown to the selected language version are lexed as
/// identifiers.
///
/// # Responsibilities
/// - Converts the input character stream into located tokens.
/// - Skips whitespace and `//` comments while tracking lines and columns.
/// - Reports lexical errors for unrecognized input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// Statements are recognized by an ordered list of validators chosen per
/// language version; expressions are built with a Shunting-Yard precedence
/// parser.
///
/// # Responsibilities
/// - Converts tokens into `AstNode` statements, one statement per call.
/// - Consumes exactly the tokens that belong to the recognized statement.
/// - Reports structured errors for malformed or unknown statements.
pub mod parser;
/// Tokens and the token stream contract the parser consumes.
pub mod token;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the runtime values and types of PrintScript together
/// with the type rules that convert raw input, check assignments and produce
/// the canonical printed form of values.
///
/// # Responsibilities
/// - Defines the `PsValue` and `PsType` enums.
/// - Converts external text into typed values.
/// - Enforces that a variable only ever holds values of its declared type.
pub mod value;
