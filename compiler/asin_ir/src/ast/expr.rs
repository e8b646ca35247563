//! Expression nodes.

use super::operators::{BinaryOp, UnaryOp};
use crate::Span;

/// Literal values written directly in source.
#[derive(Clone, PartialEq, Debug)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

/// An identifier that resolves in variable space.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VariableRef {
    pub name: String,
    pub span: Span,
}

impl VariableRef {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        VariableRef {
            name: name.into(),
            span,
        }
    }
}

/// An identifier in call position; resolves in function space only.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CallTarget {
    pub name: String,
    pub span: Span,
}

impl CallTarget {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        CallTarget {
            name: name.into(),
            span,
        }
    }
}

/// Call of a native function: `name(args)`.
#[derive(Clone, PartialEq, Debug)]
pub struct Call {
    pub target: CallTarget,
    pub args: Vec<Expr>,
}

/// Expression node.
#[derive(Clone, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Build an expression without source position (tests, embedding).
    pub fn synthetic(kind: ExprKind) -> Self {
        Expr {
            kind,
            span: Span::DUMMY,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    Literal(Literal),
    Variable(VariableRef),
    /// Array literal; allocates a fresh array on every evaluation.
    Array(Vec<Expr>),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    /// `a[i]`: the target is always a plain variable.
    Index {
        target: VariableRef,
        index: Box<Expr>,
    },
    Call(Call),
}
