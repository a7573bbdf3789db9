use std::fmt;

use logos::Logos;

use crate::interpreter::lexer::LexerExtras;

/// The kind of a lexical token.
///
/// Every token produced by the lexer carries one of these kinds together with
/// its source text. `Eof` is never produced by the lexer; token streams
/// return it once their tokens are exhausted.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// `let`
    #[token("let")]
    Let,
    /// `const`
    #[token("const")]
    Const,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `number`
    #[token("number")]
    NumberType,
    /// `string`
    #[token("string")]
    StringType,
    /// `boolean`
    #[token("boolean")]
    BooleanType,
    /// `println`
    #[token("println")]
    Println,
    /// `readInput`
    #[token("readInput")]
    ReadInput,
    /// `readEnv`
    #[token("readEnv")]
    ReadEnv,
    /// `true` or `false`.
    #[token("true")]
    #[token("false")]
    BooleanLiteral,
    /// Numeric literals such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    NumberLiteral,
    /// String literals in double or single quotes.
    #[regex(r#""[^"\n]*""#)]
    #[regex(r"'[^'\n]*'")]
    StringLiteral,
    /// Variable names such as `x` or `total_1`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `=`
    #[token("=")]
    Assign,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip)]
    Comment,
    /// Line breaks; skipped, but they advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line       += 1;
        lex.extras.line_start  = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns `true` for the tokens naming a builtin function.
    #[must_use]
    pub const fn is_builtin_call(self) -> bool {
        matches!(self, Self::Println | Self::ReadInput | Self::ReadEnv)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Let => "'let'",
            Self::Const => "'const'",
            Self::If => "'if'",
            Self::Else => "'else'",
            Self::NumberType => "'number'",
            Self::StringType => "'string'",
            Self::BooleanType => "'boolean'",
            Self::Println => "'println'",
            Self::ReadInput => "'readInput'",
            Self::ReadEnv => "'readEnv'",
            Self::BooleanLiteral => "boolean literal",
            Self::NumberLiteral => "number literal",
            Self::StringLiteral => "string literal",
            Self::Identifier => "identifier",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::EqualEqual => "'=='",
            Self::BangEqual => "'!='",
            Self::Less => "'<'",
            Self::LessEqual => "'<='",
            Self::Greater => "'>'",
            Self::GreaterEqual => "'>='",
            Self::Assign => "'='",
            Self::Colon => "':'",
            Self::Semicolon => "';'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Comment => "comment",
            Self::NewLine => "line break",
            Self::Ignored => "whitespace",
            Self::Eof => "end of input",
        };
        f.write_str(text)
    }
}

/// A position in the source text. Lines and columns start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Location {
    /// The source line.
    pub line:   usize,
    /// The column (in bytes) within the line.
    pub column: usize,
}

impl Location {
    /// Creates a location.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A lexical token: its kind, its exact source text and where it starts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// What the token is.
    pub kind:     TokenKind,
    /// The source text of the token.
    pub lexeme:   String,
    /// Where the token starts.
    pub location: Location,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, location: Location) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               location }
    }
}

/// Read access to an ordered, EOF-terminated sequence of tokens.
///
/// Parsing only moves forward: `consume` advances past the current token and
/// `peek` looks ahead without side effects. Looking or consuming past the
/// last token yields an `Eof` token and never fails.
pub trait TokenProvider {
    /// Returns the token `k` positions ahead of the current one (`k = 0` is
    /// the current token).
    fn peek(&self, k: usize) -> &Token;

    /// Returns the current token and advances past it.
    fn consume(&mut self) -> Token;

    /// Returns the most recently consumed token, if any. Used only to place
    /// errors that are detected at end of input.
    fn previous(&self) -> Option<&Token>;

    /// Returns `true` once every token has been consumed.
    fn is_at_end(&self) -> bool {
        self.peek(0).kind == TokenKind::Eof
    }
}

/// A [`TokenProvider`] over an owned token vector.
///
/// # Example
/// ```
/// use printscript::interpreter::token::{Location, Token, TokenKind, TokenProvider, TokenStream};
///
/// let mut stream = TokenStream::new(vec![Token::new(TokenKind::Identifier, "x", Location::new(1, 1))]);
///
/// assert_eq!(stream.peek(1).kind, TokenKind::Eof);
/// assert_eq!(stream.consume().lexeme, "x");
/// assert!(stream.is_at_end());
/// assert_eq!(stream.consume().kind, TokenKind::Eof);
/// ```
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens:   Vec<Token>,
    position: usize,
    eof:      Token,
}

impl TokenStream {
    /// Creates a stream positioned at the first token.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof_location = tokens.last()
                                 .map_or(Location::new(1, 1), |last| {
                                     Location::new(last.location.line,
                                                   last.location.column + last.lexeme.len())
                                 });
        Self { tokens,
               position: 0,
               eof: Token::new(TokenKind::Eof, "", eof_location) }
    }

    /// The number of tokens consumed so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl TokenProvider for TokenStream {
    fn peek(&self, k: usize) -> &Token {
        self.tokens.get(self.position + k).unwrap_or(&self.eof)
    }

    fn consume(&mut self) -> Token {
        match self.tokens.get(self.position) {
            Some(token) => {
                self.position += 1;
                token.clone()
            },
            None => self.eof.clone(),
        }
    }

    fn previous(&self) -> Option<&Token> {
        self.position.checked_sub(1).and_then(|i| self.tokens.get(i))
    }
}
