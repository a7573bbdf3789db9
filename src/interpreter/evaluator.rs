/// Core evaluation logic and context management.
///
/// Contains the runtime context, the dispatch over every AST node and the
/// evaluator's result type.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation and comparisons.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Statement execution.
///
/// Declarations, assignments, conditionals and the blocks they run.
pub mod statement;

/// Builtin function calls.
///
/// Implements `println`, `readInput` and `readEnv` on top of the context's
/// I/O collaborators.
pub mod function;

/// The scoped variable store.
///
/// A stack of lexical frames holding typed bindings, plus the guard that pops
/// a frame when a block is left.
pub mod scope;

/// Utility functions for evaluation.
///
/// Evaluation of literals and variable references.
pub mod utils;
