use crate::{
    error::InterpreterError,
    interpreter::{
        evaluator::core::EvalResult,
        token::Location,
        value::core::{PsType, PsValue},
    },
};

/// Converts external text (user input, environment variables) into a value of
/// the `target` type.
///
/// Numbers are parsed as `f64` after trimming surrounding whitespace.
/// Booleans accept `true`/`1` and `false`/`0`. Strings are taken verbatim.
///
/// # Parameters
/// - `target`: The type the text must be converted to.
/// - `raw`: The text as it was read.
/// - `location`: Source location for error reporting.
///
/// # Errors
/// Returns [`InterpreterError::InputParse`] carrying the raw text if it does
/// not denote a value of `target`.
///
/// # Example
/// ```
/// use printscript::interpreter::{
///     token::Location,
///     value::{
///         core::{PsType, PsValue},
///         type_rules::parse_raw_to,
///     },
/// };
///
/// let at = Location::new(1, 1);
///
/// assert_eq!(parse_raw_to(PsType::Number, " 42 ", at).unwrap(), PsValue::Number(42.0));
/// assert_eq!(parse_raw_to(PsType::Boolean, "1", at).unwrap(), PsValue::Bool(true));
/// assert!(parse_raw_to(PsType::Number, "abc", at).is_err());
/// ```
pub fn parse_raw_to(target: PsType, raw: &str, location: Location) -> EvalResult<PsValue> {
    let failure = || InterpreterError::InputParse { raw: raw.to_string(),
                                                    target,
                                                    location };

    match target {
        PsType::String => Ok(PsValue::Str(raw.to_string())),
        PsType::Number => raw.trim()
                             .parse::<f64>()
                             .map(PsValue::Number)
                             .map_err(|_| failure()),
        PsType::Boolean => match raw.trim() {
            "true" | "1" => Ok(PsValue::Bool(true)),
            "false" | "0" => Ok(PsValue::Bool(false)),
            _ => Err(failure()),
        },
    }
}

/// Checks that `value` may be stored in a variable of type `expected`.
///
/// # Errors
/// Returns [`InterpreterError::TypeMismatch`] if the runtime type of `value`
/// differs from `expected`.
pub fn ensure_assignable(expected: PsType,
                         value: &PsValue,
                         location: Location)
                         -> EvalResult<()> {
    let found = value.ps_type();
    if found == expected {
        Ok(())
    } else {
        Err(InterpreterError::TypeMismatch { expected,
                                             found,
                                             location })
    }
}

/// The canonical text of a value, as `println` prints it and as `+` uses it
/// for string concatenation.
///
/// Integral numbers print without a fractional part and negative zero prints
/// as `0`; other numbers use the shortest representation that reads back to
/// the same `f64`.
///
/// # Example
/// ```
/// use printscript::interpreter::value::{core::PsValue, type_rules::format_for_print};
///
/// assert_eq!(format_for_print(&PsValue::Number(14.0)), "14");
/// assert_eq!(format_for_print(&PsValue::Number(-0.0)), "0");
/// assert_eq!(format_for_print(&PsValue::Number(3.14)), "3.14");
/// assert_eq!(format_for_print(&PsValue::Str("hi".into())), "hi");
/// assert_eq!(format_for_print(&PsValue::Bool(false)), "false");
/// ```
#[must_use]
pub fn format_for_print(value: &PsValue) -> String {
    match value {
        PsValue::Number(n) if *n == 0.0 => "0".to_string(),
        PsValue::Number(n) => n.to_string(),
        PsValue::Str(s) => s.clone(),
        PsValue::Bool(b) => b.to_string(),
    }
}
