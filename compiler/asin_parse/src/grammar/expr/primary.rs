//! Primary expressions: literals, identifiers, calls, indexing, array
//! literals and parenthesized groups.

use asin_ir::{CallTarget, Expr, ExprKind, Literal, TokenKind, VariableRef};

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.current();
        let span = token.span;

        let literal = match &token.kind {
            TokenKind::Int(n) => Some(Literal::Int(*n)),
            TokenKind::Float(bits) => Some(Literal::Float(f64::from_bits(*bits))),
            TokenKind::Str(s) => Some(Literal::Str(s.clone())),
            TokenKind::Totoo => Some(Literal::Bool(true)),
            TokenKind::Huwad => Some(Literal::Bool(false)),
            _ => None,
        };
        if let Some(literal) = literal {
            self.advance();
            return Ok(Expr::new(ExprKind::Literal(literal), span));
        }

        match &token.kind {
            TokenKind::Ident(_) => self.parse_ident_expr(),
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(&TokenKind::RParen, "`)`")?;
                Ok(inner)
            }
            TokenKind::LBracket => {
                self.advance();
                let items = self.parse_expr_list(&TokenKind::RBracket)?;
                let end = self.expect(&TokenKind::RBracket, "`]`")?;
                Ok(Expr::new(ExprKind::Array(items), span.merge(end)))
            }
            _ => Err(self.error_at_current(Some("an expression"))),
        }
    }

    /// `name`, `name(args)` or `name[index]`.
    fn parse_ident_expr(&mut self) -> Result<Expr, ParseError> {
        let (name, name_span) = self.expect_ident()?;

        match self.current_kind() {
            TokenKind::LParen => {
                let call = self.parse_call_args(CallTarget::new(name, name_span))?;
                let span = name_span.merge(self.previous_span());
                Ok(Expr::new(ExprKind::Call(call), span))
            }
            TokenKind::LBracket => {
                self.advance();
                let index = self.parse_expr()?;
                let end = self.expect(&TokenKind::RBracket, "`]`")?;
                Ok(Expr::new(
                    ExprKind::Index {
                        target: VariableRef::new(name, name_span),
                        index: Box::new(index),
                    },
                    name_span.merge(end),
                ))
            }
            _ => Ok(Expr::new(
                ExprKind::Variable(VariableRef::new(name, name_span)),
                name_span,
            )),
        }
    }
}
