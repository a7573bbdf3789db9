/// Runtime values and types.
///
/// Defines `PsType`, the three PrintScript types, and `PsValue`, the tagged
/// runtime value that always knows its own type.
pub mod core;
/// Type rules.
///
/// Conversion of raw external text into typed values, assignment
/// compatibility checks and the canonical printed form of values. Every write
/// to a variable goes through these rules.
pub mod type_rules;
