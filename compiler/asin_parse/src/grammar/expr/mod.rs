//! Expression parsing.
//!
//! Precedence, lowest to highest:
//!
//! | Level | Operators | Assoc |
//! |---|---|---|
//! | or | `o` | left |
//! | and | `at` | left |
//! | not | `hindi` (prefix) | right |
//! | comparison | `== != < <= > >=` | left |
//! | additive | `+ -` | left |
//! | multiplicative | `* / // %` | left |
//! | unary | `-` (prefix) | right |
//! | power | `**` | right |
//!
//! - `operators.rs`: the operator table per binary level
//! - `primary.rs`: literals, identifiers, calls, indexing, arrays, groups

mod operators;
mod primary;

use asin_ir::{BinaryOp, Expr, ExprKind, Span, TokenKind, UnaryOp};
use asin_stack::ensure_sufficient_stack;

use self::operators::Level;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_or())
    }

    /// One left-associative level: `operand (op operand)*`.
    fn parse_left_assoc(
        &mut self,
        level: Level,
        operand: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut left = operand(self)?;
        while let Some(op) = level.operator(self.current_kind()) {
            self.advance();
            let right = operand(self)?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(Level::Or, Self::parse_and)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(Level::And, Self::parse_not)
    }

    fn parse_not(&mut self) -> Result<Expr, ParseError> {
        if self.check(&TokenKind::Hindi) {
            let start = self.advance().span;
            let operand = ensure_sufficient_stack(|| self.parse_not())?;
            return Ok(unary(UnaryOp::Not, start, operand));
        }
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(Level::Comparison, Self::parse_additive)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(Level::Additive, Self::parse_multiplicative)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(Level::Multiplicative, Self::parse_unary)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.check(&TokenKind::Minus) {
            let start = self.advance().span;
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;
            return Ok(unary(UnaryOp::Neg, start, operand));
        }
        self.parse_power()
    }

    /// `**` binds tighter than prefix minus on its left and accepts one on
    /// its right: `-2 ** -1` is `-(2 ** (-1))`.
    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_primary()?;
        if self.check(&TokenKind::StarStar) {
            self.advance();
            let exponent = ensure_sufficient_stack(|| self.parse_unary())?;
            return Ok(binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    /// Comma-separated expressions up to (not including) `closing`.
    pub(crate) fn parse_expr_list(&mut self, closing: &TokenKind) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = Vec::new();
        if self.check(closing) {
            return Ok(exprs);
        }
        loop {
            exprs.push(self.parse_expr()?);
            if !self.cursor.eat(&TokenKind::Comma) {
                return Ok(exprs);
            }
        }
    }
}

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    let span = left.span.merge(right.span);
    Expr::new(
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    )
}

fn unary(op: UnaryOp, op_span: Span, operand: Expr) -> Expr {
    let span = op_span.merge(operand.span);
    Expr::new(
        ExprKind::Unary {
            op,
            operand: Box::new(operand),
        },
        span,
    )
}
