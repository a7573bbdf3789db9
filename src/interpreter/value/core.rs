use std::fmt;

use crate::{
    error::InterpreterError,
    interpreter::{
        evaluator::core::EvalResult,
        token::{Location, TokenKind},
        value::type_rules::format_for_print,
    },
};

/// The static type of a PrintScript variable or value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PsType {
    /// 64-bit floating point numbers.
    Number,
    /// Text.
    String,
    /// `true` or `false`.
    Boolean,
}

impl PsType {
    /// Maps a type keyword token (`number`, `string`, `boolean`) to its type.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::NumberType => Some(Self::Number),
            TokenKind::StringType => Some(Self::String),
            TokenKind::BooleanType => Some(Self::Boolean),
            _ => None,
        }
    }

    /// The value a variable of this type holds before its first assignment:
    /// `0`, `""` or `false`.
    #[must_use]
    pub const fn zero_value(self) -> PsValue {
        match self {
            Self::Number => PsValue::Number(0.0),
            Self::String => PsValue::Str(String::new()),
            Self::Boolean => PsValue::Bool(false),
        }
    }
}

impl fmt::Display for PsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::Boolean => write!(f, "boolean"),
        }
    }
}

/// Represents a runtime value in the interpreter.
///
/// Every value carries its [`PsType`] through its variant. Values of
/// different variants are never equal.
#[derive(Debug, Clone, PartialEq)]
pub enum PsValue {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value, without quotes.
    Str(String),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators and used as `if` conditions.
    Bool(bool),
}

impl From<f64> for PsValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for PsValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for PsValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for PsValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl PsValue {
    /// The runtime type of the value.
    ///
    /// # Example
    /// ```
    /// use printscript::interpreter::value::core::{PsType, PsValue};
    ///
    /// assert_eq!(PsValue::Number(1.5).ps_type(), PsType::Number);
    /// assert_eq!(PsValue::from("hi").ps_type(), PsType::String);
    /// ```
    #[must_use]
    pub const fn ps_type(&self) -> PsType {
        match self {
            Self::Number(_) => PsType::Number,
            Self::Str(_) => PsType::String,
            Self::Bool(_) => PsType::Boolean,
        }
    }

    /// Returns the number inside the value, or a type mismatch.
    ///
    /// # Parameters
    /// - `location`: Source location for error reporting.
    pub const fn as_number(&self, location: Location) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(InterpreterError::TypeMismatch { expected: PsType::Number,
                                                      found: self.ps_type(),
                                                      location }),
        }
    }

    /// Returns the boolean inside the value, or a type mismatch.
    ///
    /// Used for `if` conditions.
    ///
    /// # Parameters
    /// - `location`: Source location for error reporting.
    pub const fn as_bool(&self, location: Location) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(InterpreterError::TypeMismatch { expected: PsType::Boolean,
                                                      found: self.ps_type(),
                                                      location }),
        }
    }
}

impl fmt::Display for PsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_for_print(self))
    }
}
