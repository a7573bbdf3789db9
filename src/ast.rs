use crate::interpreter::{
    token::{Location, TokenKind},
    value::core::PsType,
};

/// The kind of a literal as it appeared in the source.
///
/// Literals keep their source text; the interpreter converts it into a value
/// when the literal is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// A numeric literal such as `3.14`.
    Number,
    /// A quoted string literal; the text still includes its quotes.
    String,
    /// `true` or `false`.
    Boolean,
}

/// A builtin function PrintScript programs can call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// `println(expr)`: prints its argument. Only usable as a statement.
    Println,
    /// `readInput(prompt)`: reads a line of input.
    ReadInput,
    /// `readEnv(name)`: reads an environment variable.
    ReadEnv,
}

impl Builtin {
    /// Maps a builtin call token to the function it names.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Println => Some(Self::Println),
            TokenKind::ReadInput => Some(Self::ReadInput),
            TokenKind::ReadEnv => Some(Self::ReadEnv),
            _ => None,
        }
    }

    /// Returns `true` for builtins that produce no value.
    #[must_use]
    pub const fn is_void(self) -> bool {
        matches!(self, Self::Println)
    }
}

impl std::fmt::Display for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Println => "println",
            Self::ReadInput => "readInput",
            Self::ReadEnv => "readEnv",
        };
        write!(f, "{name}")
    }
}

/// A variable declaration: name, declared type and mutability.
///
/// `let` declarations are mutable, `const` declarations are not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The name of the variable.
    pub identifier:    String,
    /// The type every value of the variable must have.
    pub declared_type: PsType,
    /// `true` for `let`, `false` for `const`.
    pub is_mutable:    bool,
    /// Location of the declaring keyword.
    pub location:      Location,
}

/// A node of the PrintScript abstract syntax tree.
///
/// The set of nodes is closed. Expression nodes (`Literal`, `Identifier`,
/// `BinaryOp`, `UnaryOp`, non-void `FunctionCall`) produce values; statement
/// nodes (`Declaration`, `DeclarationAssignment`, `Assignment`,
/// `FunctionCall`, `Conditional`) are executed for their effects. Nodes are
/// never mutated once built.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// A literal value.
    Literal {
        /// What kind of literal this is.
        kind:     LiteralKind,
        /// The literal's source text.
        lexeme:   String,
        /// Location in the source code.
        location: Location,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name:     String,
        /// Location in the source code.
        location: Location,
    },
    /// A binary operation (addition, comparison, ...).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Location of the operator.
        location: Location,
    },
    /// A unary operation (sign).
    UnaryOp {
        /// The operator.
        op:       UnaryOperator,
        /// The operand expression.
        operand:  Box<Self>,
        /// Location of the operator.
        location: Location,
    },
    /// `let x: number;` or `const x: number;`
    Declaration(Declaration),
    /// `let x: number = expr;`
    DeclarationAssignment {
        /// The declared variable.
        declaration: Declaration,
        /// The initializer expression.
        value:       Box<Self>,
    },
    /// `x = expr;`
    Assignment {
        /// Name of the assigned variable.
        identifier: String,
        /// The new value.
        expression: Box<Self>,
        /// Location of the variable name.
        location:   Location,
    },
    /// A builtin call, either as a statement or inside an expression.
    FunctionCall {
        /// The called builtin.
        function: Builtin,
        /// The single argument expression.
        argument: Box<Self>,
        /// `true` if the call produces no value. Always equal to
        /// [`Builtin::is_void`] for trees built by the parser.
        is_void:  bool,
        /// Location of the function name.
        location: Location,
    },
    /// `if (condition) { ... } else { ... }`
    Conditional {
        /// Must evaluate to a boolean.
        condition: Box<Self>,
        /// Statements run when the condition holds.
        then_body: Vec<Self>,
        /// Statements run otherwise, if an `else` block is present.
        else_body: Option<Vec<Self>>,
        /// Location of the `if` keyword.
        location:  Location,
    },
}

impl AstNode {
    /// Gets the source location of `self`.
    ///
    /// ## Example
    /// ```
    /// use printscript::{ast::AstNode, interpreter::token::Location};
    ///
    /// let node = AstNode::Identifier { name:     "x".to_string(),
    ///                                  location: Location::new(5, 3), };
    ///
    /// assert_eq!(node.location(), Location::new(5, 3));
    /// ```
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::Literal { location, .. }
            | Self::Identifier { location, .. }
            | Self::BinaryOp { location, .. }
            | Self::UnaryOp { location, .. }
            | Self::Assignment { location, .. }
            | Self::FunctionCall { location, .. }
            | Self::Conditional { location, .. } => *location,
            Self::Declaration(declaration)
            | Self::DeclarationAssignment { declaration, .. } => declaration.location,
        }
    }

    /// A short, human readable name of the node's variant.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Literal { .. } => "literal",
            Self::Identifier { .. } => "identifier",
            Self::BinaryOp { .. } => "binary operation",
            Self::UnaryOp { .. } => "unary operation",
            Self::Declaration(_) => "declaration",
            Self::DeclarationAssignment { .. } => "declaration with assignment",
            Self::Assignment { .. } => "assignment",
            Self::FunctionCall { .. } => "function call",
            Self::Conditional { .. } => "conditional",
        }
    }

    /// The direct children of this node, in source order.
    ///
    /// This is the generic traversal relation for tools that walk the tree
    /// without caring about node kinds; the interpreter itself dispatches on
    /// the variant instead.
    ///
    /// ## Example
    /// ```
    /// use printscript::{
    ///     ast::{AstNode, BinaryOperator, LiteralKind},
    ///     interpreter::token::Location,
    /// };
    ///
    /// let one = AstNode::Literal { kind:     LiteralKind::Number,
    ///                              lexeme:   "1".to_string(),
    ///                              location: Location::new(1, 1), };
    /// let sum = AstNode::BinaryOp { left:     Box::new(one.clone()),
    ///                               op:       BinaryOperator::Add,
    ///                               right:    Box::new(one.clone()),
    ///                               location: Location::new(1, 3), };
    ///
    /// assert_eq!(sum.children(), vec![&one, &one]);
    /// assert!(one.children().is_empty());
    /// ```
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::Literal { .. } | Self::Identifier { .. } | Self::Declaration(_) => Vec::new(),
            Self::BinaryOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Self::UnaryOp { operand, .. } => vec![operand.as_ref()],
            Self::DeclarationAssignment { value, .. } => vec![value.as_ref()],
            Self::Assignment { expression, .. } => vec![expression.as_ref()],
            Self::FunctionCall { argument, .. } => vec![argument.as_ref()],
            Self::Conditional { condition,
                                then_body,
                                else_body,
                                .. } => {
                let mut children = vec![condition.as_ref()];
                children.extend(then_body);
                children.extend(else_body.iter().flatten());
                children
            },
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl BinaryOperator {
    /// Maps an operator token to its binary operator.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Star => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            TokenKind::Less => Some(Self::Less),
            TokenKind::Greater => Some(Self::Greater),
            TokenKind::LessEqual => Some(Self::LessEqual),
            TokenKind::GreaterEqual => Some(Self::GreaterEqual),
            TokenKind::EqualEqual => Some(Self::Equal),
            TokenKind::BangEqual => Some(Self::NotEqual),
            _ => None,
        }
    }

    /// Binding strength; higher binds tighter. All levels are left
    /// associative.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div => 3,
            Self::Add | Self::Sub => 2,
            Self::Less | Self::Greater | Self::LessEqual | Self::GreaterEqual => 1,
            Self::Equal | Self::NotEqual => 0,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

/// Represents a unary operator.
///
/// The parser accepts both signs; the interpreter only evaluates negation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Unary plus (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Minus,
}

impl UnaryOperator {
    /// Maps an operator token to its unary operator, if it can be one.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Plus),
            TokenKind::Minus => Some(Self::Minus),
            _ => None,
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}
