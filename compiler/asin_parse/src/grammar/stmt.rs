//! Statement and block parsing.

use asin_ir::{
    BinaryOp, Block, Call, CallTarget, ElseBranch, IfStmt, Stmt, StmtKind, TokenKind,
    VariableRef,
};
use asin_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        trace!(kind = ?self.current_kind(), "parse_stmt");
        match self.current_kind() {
            TokenKind::Ident(_) => self.parse_ident_stmt(),
            TokenKind::Kapag => {
                let start = self.current_span();
                let if_stmt = self.parse_if()?;
                Ok(Stmt::new(
                    StmtKind::If(if_stmt),
                    start.merge(self.previous_span()),
                ))
            }
            TokenKind::Hanggat => self.parse_while(),
            TokenKind::Sa => self.parse_for(),
            TokenKind::Ilimbag => self.parse_print(),
            TokenKind::Lumisan => {
                let start = self.advance().span;
                let end = self.expect(&TokenKind::Semicolon, "`;`")?;
                Ok(Stmt::new(StmtKind::Exit, start.merge(end)))
            }
            _ => Err(self.error_at_current(Some("a statement"))),
        }
    }

    /// Statements that begin with an identifier: assignment, compound
    /// assignment, or a call.
    fn parse_ident_stmt(&mut self) -> Result<Stmt, ParseError> {
        let (name, name_span) = self.expect_ident()?;

        if self.check(&TokenKind::LParen) {
            let call = self.parse_call_args(CallTarget::new(name, name_span))?;
            let end = self.expect(&TokenKind::Semicolon, "`;`")?;
            return Ok(Stmt::new(StmtKind::Call(call), name_span.merge(end)));
        }

        let target = VariableRef::new(name, name_span);
        let kind = if self.cursor.eat(&TokenKind::Eq) {
            let value = self.parse_expr()?;
            StmtKind::Assign { target, value }
        } else if let Some(op) = self.match_compound_assign_op() {
            self.advance();
            let value = self.parse_expr()?;
            StmtKind::CompoundAssign { target, op, value }
        } else {
            return Err(self.error_at_current(Some("`=`, a compound assignment or `(`")));
        };

        let end = self.expect(&TokenKind::Semicolon, "`;`")?;
        Ok(Stmt::new(kind, name_span.merge(end)))
    }

    fn match_compound_assign_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::PlusEq => Some(BinaryOp::Add),
            TokenKind::MinusEq => Some(BinaryOp::Sub),
            TokenKind::StarEq => Some(BinaryOp::Mul),
            TokenKind::SlashEq => Some(BinaryOp::Div),
            TokenKind::SlashSlashEq => Some(BinaryOp::FloorDiv),
            TokenKind::StarStarEq => Some(BinaryOp::Pow),
            TokenKind::PercentEq => Some(BinaryOp::Mod),
            _ => None,
        }
    }

    /// `kapag (cond) { … } [kundiman { … } | ngunit kapag …]`
    fn parse_if(&mut self) -> Result<IfStmt, ParseError> {
        self.expect(&TokenKind::Kapag, "`kapag`")?;
        let cond = self.parse_paren_cond()?;
        let then_block = self.parse_block()?;

        let else_branch = if self.cursor.eat(&TokenKind::Kundiman) {
            Some(ElseBranch::Block(self.parse_block()?))
        } else if self.cursor.eat(&TokenKind::Ngunit) {
            Some(ElseBranch::If(Box::new(self.parse_if()?)))
        } else {
            None
        };

        Ok(IfStmt {
            cond,
            then_block,
            else_branch,
        })
    }

    /// `hanggat (cond) { … }`
    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let cond = self.parse_paren_cond()?;
        let body = self.parse_block()?;
        let span = start.merge(body.span);
        Ok(Stmt::new(StmtKind::While { cond, body }, span))
    }

    /// `sa bawat var sa [start:end] { … }`
    fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.advance().span;
        self.expect(&TokenKind::Bawat, "`bawat`")?;
        let (name, var_span) = self.expect_ident()?;
        self.expect(&TokenKind::Sa, "`sa`")?;
        self.expect(&TokenKind::LBracket, "`[`")?;
        let start = self.parse_expr()?;
        self.expect(&TokenKind::Colon, "`:`")?;
        let end = self.parse_expr()?;
        self.expect(&TokenKind::RBracket, "`]`")?;
        let body = self.parse_block()?;

        let span = start_span.merge(body.span);
        Ok(Stmt::new(
            StmtKind::For {
                var: VariableRef::new(name, var_span),
                start,
                end,
                body,
            },
            span,
        ))
    }

    /// `ilimbag(args);`
    fn parse_print(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        self.expect(&TokenKind::LParen, "`(`")?;
        let args = self.parse_expr_list(&TokenKind::RParen)?;
        self.expect(&TokenKind::RParen, "`)`")?;
        let end = self.expect(&TokenKind::Semicolon, "`;`")?;
        Ok(Stmt::new(StmtKind::Print(args), start.merge(end)))
    }

    fn parse_paren_cond(&mut self) -> Result<asin_ir::Expr, ParseError> {
        self.expect(&TokenKind::LParen, "`(`")?;
        let cond = self.parse_expr()?;
        self.expect(&TokenKind::RParen, "`)`")?;
        Ok(cond)
    }

    /// `{ stmt* }`
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        ensure_sufficient_stack(|| {
            let start = self.expect(&TokenKind::LBrace, "`{`")?;
            let mut stmts = Vec::new();
            while !self.check(&TokenKind::RBrace) {
                if self.cursor.is_at_end() {
                    return Err(self.error_at_current(Some("`}`")).within_block(start));
                }
                stmts.push(self.parse_stmt().map_err(|e| e.within_block(start))?);
            }
            let end = self.advance().span;
            Ok(Block::new(stmts, start.merge(end)))
        })
    }

    /// Parse `(args)` after a call target.
    pub(crate) fn parse_call_args(&mut self, target: CallTarget) -> Result<Call, ParseError> {
        self.expect(&TokenKind::LParen, "`(`")?;
        let args = self.parse_expr_list(&TokenKind::RParen)?;
        self.expect(&TokenKind::RParen, "`)`")?;
        Ok(Call { target, args })
    }
}
