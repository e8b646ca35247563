//! Asin IR - spans, tokens and the syntax tree.
//!
//! This crate contains the data structures shared by every stage of the
//! interpreter:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - AST nodes (`Program`, `Stmt`, `Expr`, `Block`) and operator enums

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod span;
mod token;

pub use ast::{
    BinaryOp, Block, Call, CallTarget, ElseBranch, Expr, ExprKind, IfStmt, Literal, Program,
    Stmt, StmtKind, UnaryOp, VariableRef,
};
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
