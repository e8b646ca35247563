//! Statement execution.

use asin_ir::{Block, ElseBranch, Expr, IfStmt, Stmt, StmtKind, VariableRef};
use asin_stack::ensure_sufficient_stack;
use tracing::debug;

use super::Interpreter;
use crate::errors::{invalid_range_bound, EvalResult};
use crate::operators::evaluate_binary;
use crate::outcome::Outcome;
use crate::value::Value;

impl Interpreter {
    #[tracing::instrument(level = "trace", skip_all, fields(span = %stmt.span))]
    pub fn exec_stmt(&mut self, stmt: &Stmt) -> EvalResult<Outcome> {
        match &stmt.kind {
            StmtKind::Assign { target, value } => {
                let value = self.eval_expr(value)?;
                self.env.set_variable(&target.name, value);
                Ok(Outcome::Empty)
            }
            StmtKind::CompoundAssign { target, op, value } => {
                let current = self
                    .env
                    .get_variable(&target.name)
                    .map_err(|e| e.with_span(target.span))?;
                let rhs = self.eval_expr(value)?;
                let combined =
                    evaluate_binary(&current, &rhs, *op).map_err(|e| e.or_span(stmt.span))?;
                self.env.set_variable(&target.name, combined);
                Ok(Outcome::Empty)
            }
            StmtKind::If(if_stmt) => self.exec_if(if_stmt),
            StmtKind::While { cond, body } => self.exec_while(cond, body),
            StmtKind::For {
                var,
                start,
                end,
                body,
            } => self.exec_for(var, start, end, body),
            StmtKind::Print(args) => {
                let values = self.eval_args(args)?;
                let line: Vec<String> = values.iter().map(ToString::to_string).collect();
                self.print_handler.println(&line.join(" "));
                Ok(Outcome::Empty)
            }
            StmtKind::Exit => Ok(Outcome::Break),
            StmtKind::Call(call) => self.eval_call(call, stmt.span).map(Outcome::Value),
        }
    }

    /// Run statements in order until one yields `Break`.
    ///
    /// Values produced by call statements are discarded.
    pub fn exec_block(&mut self, block: &Block) -> EvalResult<Outcome> {
        ensure_sufficient_stack(|| {
            for stmt in &block.stmts {
                if self.exec_stmt(stmt)?.is_break() {
                    return Ok(Outcome::Break);
                }
            }
            Ok(Outcome::Empty)
        })
    }

    /// Run the first branch whose condition is truthy and return its
    /// outcome, `Break` included.
    fn exec_if(&mut self, if_stmt: &IfStmt) -> EvalResult<Outcome> {
        if self.eval_expr(&if_stmt.cond)?.is_truthy() {
            return self.exec_block(&if_stmt.then_block);
        }
        match &if_stmt.else_branch {
            Some(ElseBranch::Block(block)) => self.exec_block(block),
            Some(ElseBranch::If(elif)) => ensure_sufficient_stack(|| self.exec_if(elif)),
            None => Ok(Outcome::Empty),
        }
    }

    fn exec_while(&mut self, cond: &Expr, body: &Block) -> EvalResult<Outcome> {
        while self.eval_expr(cond)?.is_truthy() {
            if self.exec_block(body)?.is_break() {
                debug!("hanggat exited via lumisan");
                break;
            }
        }
        Ok(Outcome::Empty)
    }

    /// `sa bawat var sa [start:end]`: both bounds are evaluated once and
    /// the range is inclusive. `var` is unbound afterwards, whatever it
    /// held before the loop.
    fn exec_for(
        &mut self,
        var: &VariableRef,
        start: &Expr,
        end: &Expr,
        body: &Block,
    ) -> EvalResult<Outcome> {
        let first = self.range_bound(start)?;
        let last = self.range_bound(end)?;

        let result = self.iterate(var, first, last, body);
        self.env.delete_variable(&var.name);
        result
    }

    fn iterate(
        &mut self,
        var: &VariableRef,
        first: i64,
        last: i64,
        body: &Block,
    ) -> EvalResult<Outcome> {
        for i in first..=last {
            self.env.set_variable(&var.name, Value::Int(i));
            if self.exec_block(body)?.is_break() {
                debug!(var = %var.name, at = i, "sa bawat exited via lumisan");
                break;
            }
        }
        Ok(Outcome::Empty)
    }

    fn range_bound(&mut self, bound: &Expr) -> EvalResult<i64> {
        match self.eval_expr(bound)? {
            Value::Int(n) => Ok(n),
            other => Err(invalid_range_bound(&other).with_span(bound.span)),
        }
    }
}
