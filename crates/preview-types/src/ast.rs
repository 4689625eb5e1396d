//! AST node types for the teaching language.
//!
//! The language is line-oriented: every non-blank line becomes exactly one
//! [`Stmt`]. Lines that match neither an assignment nor a print call become
//! [`Stmt::Skip`] and are ignored by the evaluator.

use crate::Span;

// ══════════════════════════════════════════════════════════════════════════════
// Top Level
// ══════════════════════════════════════════════════════════════════════════════

/// A parsed program: statements in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

/// A spanned identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Statements
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `name = value`
    Assignment(Assignment),
    /// `print(arg, ...)`
    Print(PrintCall),
    /// Any other line.
    Skip(SkipLine),
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Assignment(a) => a.span,
            Stmt::Print(p) => p.span,
            Stmt::Skip(s) => s.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: Ident,
    pub value: Expr,
    pub span: Span,
}

/// A print call. Arguments are split at top-level commas; the printed line
/// is every resolved argument joined by a single space.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintCall {
    pub args: Vec<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkipLine {
    pub text: String,
    pub span: Span,
}

// ══════════════════════════════════════════════════════════════════════════════
// Expressions
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    StringLiteral(String),
    NumberLiteral(f64),
    BoolLiteral(bool),
    Identifier(String),
    /// `f"..."`: literal text with `{name}` placeholders.
    InterpolatedString(Vec<StringPart>),
    ListLiteral(Vec<Expr>),
    /// Key/value pairs in source order.
    DictLiteral(Vec<(Expr, Expr)>),
    /// Source text taken verbatim.
    RawText(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum StringPart {
    Literal(String),
    Placeholder(Ident),
}
