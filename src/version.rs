use std::{fmt, str::FromStr};

use clap::ValueEnum;

use crate::interpreter::token::TokenKind;

/// A PrintScript language version.
///
/// The version selects which keywords the lexer recognizes and which
/// statement validators make up the grammar. Version `1.0` knows `let`
/// declarations, assignments and `println`; version `1.1` adds `const`,
/// booleans, `if`/`else`, `readInput` and `readEnv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Version {
    /// PrintScript 1.0.
    #[value(name = "1.0")]
    V1_0,
    /// PrintScript 1.1.
    #[default]
    #[value(name = "1.1")]
    V1_1,
}

impl Version {
    /// Returns `true` if `kind` is part of this version's vocabulary.
    ///
    /// Punctuation, operators and literals other than booleans exist in every
    /// version; only keywords are version dependent.
    ///
    /// # Example
    /// ```
    /// use printscript::{Version, interpreter::token::TokenKind};
    ///
    /// assert!(Version::V1_1.recognizes(TokenKind::If));
    /// assert!(!Version::V1_0.recognizes(TokenKind::If));
    /// assert!(Version::V1_0.recognizes(TokenKind::Let));
    /// ```
    #[must_use]
    pub const fn recognizes(self, kind: TokenKind) -> bool {
        match self {
            Self::V1_1 => true,
            Self::V1_0 => !matches!(kind,
                                    TokenKind::Const
                                    | TokenKind::If
                                    | TokenKind::Else
                                    | TokenKind::BooleanType
                                    | TokenKind::BooleanLiteral
                                    | TokenKind::ReadInput
                                    | TokenKind::ReadEnv),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1_0 => write!(f, "1.0"),
            Self::V1_1 => write!(f, "1.1"),
        }
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1.0" => Ok(Self::V1_0),
            "1.1" => Ok(Self::V1_1),
            other => Err(format!("unsupported PrintScript version '{other}'")),
        }
    }
}
