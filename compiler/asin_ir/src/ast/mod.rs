//! Syntax tree for Asin programs.
//!
//! Closed sum types: every composite node owns its children, and the
//! variable/function namespace split is fixed at construction through the
//! distinct `VariableRef` and `CallTarget` nodes.

mod expr;
mod operators;
mod stmt;

pub use expr::{Call, CallTarget, Expr, ExprKind, Literal, VariableRef};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{Block, ElseBranch, IfStmt, Program, Stmt, StmtKind};

#[cfg(test)]
mod tests;
