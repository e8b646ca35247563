//! Statement nodes.

use super::expr::{Call, Expr, VariableRef};
use super::operators::BinaryOp;
use crate::Span;

/// Statement node.
#[derive(Clone, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }

    pub fn synthetic(kind: StmtKind) -> Self {
        Stmt {
            kind,
            span: Span::DUMMY,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum StmtKind {
    /// `x = e;`
    Assign { target: VariableRef, value: Expr },
    /// `x op= e;` where `op` is the base arithmetic operator.
    CompoundAssign {
        target: VariableRef,
        op: BinaryOp,
        value: Expr,
    },
    If(IfStmt),
    /// `hanggat (cond) { body }`
    While { cond: Expr, body: Block },
    /// `sa bawat var sa [start:end] { body }`, inclusive on both ends.
    For {
        var: VariableRef,
        start: Expr,
        end: Expr,
        body: Block,
    },
    /// `ilimbag(args);`
    Print(Vec<Expr>),
    /// `lumisan;`
    Exit,
    /// `name(args);`
    Call(Call),
}

/// `kapag (cond) { … }` with an optional `kundiman` block or `ngunit kapag` chain.
#[derive(Clone, PartialEq, Debug)]
pub struct IfStmt {
    pub cond: Expr,
    pub then_block: Block,
    pub else_branch: Option<ElseBranch>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum ElseBranch {
    Block(Block),
    If(Box<IfStmt>),
}

/// Braced statement sequence.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>, span: Span) -> Self {
        Block { stmts, span }
    }
}

/// Top-level statement sequence of a source file.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

impl Program {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Program { stmts }
    }
}
