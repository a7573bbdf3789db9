/// Dispatch of binary operators and operand evaluation.
pub mod core;

/// Arithmetic on numbers and string concatenation.
pub mod scalar;

/// Equality and relational comparisons.
pub mod comparison;
