//! Expression evaluation.

use asin_ir::{Call, Expr, ExprKind, Literal, Span, VariableRef};
use asin_stack::ensure_sufficient_stack;
use tracing::debug;

use super::Interpreter;
use crate::errors::{not_subscriptable, EvalResult};
use crate::natives::CallContext;
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::value::Value;

impl Interpreter {
    /// Reduce an expression to a value.
    ///
    /// Errors carry the span of the innermost node where they arose.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
            .map_err(|e| e.or_span(expr.span))
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Literal(literal) => Ok(eval_literal(literal)),
            ExprKind::Variable(var) => self.lookup(var),
            ExprKind::Array(items) => Ok(Value::array(self.eval_args(items)?)),
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(&left, &right, *op)
            }
            ExprKind::Unary { op, operand } => {
                let operand = self.eval_expr(operand)?;
                evaluate_unary(&operand, *op)
            }
            ExprKind::Index { target, index } => {
                let items = match self.lookup(target)? {
                    Value::Array(items) => items,
                    other => {
                        return Err(not_subscriptable(&target.name, &other).with_span(target.span))
                    }
                };
                let index_value = self.eval_expr(index)?;
                items
                    .get(&index_value)
                    .map_err(|e| e.with_span(index.span))
            }
            ExprKind::Call(call) => self.eval_call(call, expr.span),
        }
    }

    /// Evaluate each expression fully, left to right.
    pub fn eval_args(&mut self, args: &[Expr]) -> EvalResult<Vec<Value>> {
        args.iter().map(|arg| self.eval_expr(arg)).collect()
    }

    /// Resolve in function space, evaluate arguments, then invoke.
    pub(super) fn eval_call(&mut self, call: &Call, span: Span) -> EvalResult {
        let function = self
            .env
            .get_function(&call.target.name)
            .map_err(|e| e.with_span(call.target.span))?;
        let args = self.eval_args(&call.args)?;
        debug!(
            function = function.name(),
            arity = ?function.arity(),
            args = args.len(),
            "native call"
        );

        let ctx = CallContext::new(function.name(), &self.print_handler, &self.input_handler);
        function.call(&ctx, &args).map_err(|e| e.or_span(span))
    }

    fn lookup(&self, var: &VariableRef) -> EvalResult {
        self.env
            .get_variable(&var.name)
            .map_err(|e| e.with_span(var.span))
    }
}

fn eval_literal(literal: &Literal) -> Value {
    match literal {
        Literal::Int(n) => Value::Int(*n),
        Literal::Float(f) => Value::Float(*f),
        Literal::Str(s) => Value::Str(s.clone()),
        Literal::Bool(b) => Value::Bool(*b),
    }
}
