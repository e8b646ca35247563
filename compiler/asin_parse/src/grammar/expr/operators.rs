//! Which tokens are binary operators at each left-associative level.

use asin_ir::{BinaryOp, TokenKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Level {
    Or,
    And,
    Comparison,
    Additive,
    Multiplicative,
}

impl Level {
    /// The operator `kind` spells at this level.
    pub(super) fn operator(self, kind: &TokenKind) -> Option<BinaryOp> {
        let op = match (self, kind) {
            (Level::Or, TokenKind::O) => BinaryOp::Or,
            (Level::And, TokenKind::At) => BinaryOp::And,
            (Level::Comparison, TokenKind::EqEq) => BinaryOp::Eq,
            (Level::Comparison, TokenKind::NotEq) => BinaryOp::NotEq,
            (Level::Comparison, TokenKind::Lt) => BinaryOp::Lt,
            (Level::Comparison, TokenKind::LtEq) => BinaryOp::LtEq,
            (Level::Comparison, TokenKind::Gt) => BinaryOp::Gt,
            (Level::Comparison, TokenKind::GtEq) => BinaryOp::GtEq,
            (Level::Additive, TokenKind::Plus) => BinaryOp::Add,
            (Level::Additive, TokenKind::Minus) => BinaryOp::Sub,
            (Level::Multiplicative, TokenKind::Star) => BinaryOp::Mul,
            (Level::Multiplicative, TokenKind::Slash) => BinaryOp::Div,
            (Level::Multiplicative, TokenKind::SlashSlash) => BinaryOp::FloorDiv,
            (Level::Multiplicative, TokenKind::Percent) => BinaryOp::Mod,
            _ => return None,
        };
        Some(op)
    }
}
