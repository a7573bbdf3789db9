/// Parser entry points.
///
/// Holds the [`core::Parser`] that turns a token stream into statements, one
/// at a time, using the grammar of a language version.
pub mod core;

/// Statement recognition.
///
/// Defines the statement validators and the per-version [`statement::Grammar`]
/// that tries them in order.
pub mod statement;

/// Expression building.
///
/// Converts a flat token slice into an expression tree with a Shunting-Yard
/// pass to reverse polish notation followed by a reduction pass.
pub mod expression;

/// `let` and `const` declarations.
pub mod declaration;

/// Assignments to existing variables.
pub mod assignment;

/// Builtin calls used as statements.
pub mod call;

/// `if`/`else` statements and their blocks.
pub mod conditional;

/// Token scanning helpers shared by the validators.
pub mod utils;
