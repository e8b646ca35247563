//! The tree-walking interpreter.
//!
//! One `Interpreter` owns one [`Environment`] for the duration of a run;
//! nothing is global, so two interpreters never share bindings.
//!
//! - `stmt.rs`: statements, blocks and the `Outcome` protocol
//! - `expr.rs`: expressions, indexing and native calls
//! - `builder.rs`: `InterpreterBuilder`

mod builder;
mod expr;
mod stmt;

use asin_ir::Program;
use tracing::debug;

pub use builder::InterpreterBuilder;

use crate::environment::Environment;
use crate::errors::EvalResult;
use crate::input_handler::SharedInputHandler;
use crate::print_handler::SharedPrintHandler;

pub struct Interpreter {
    env: Environment,
    print_handler: SharedPrintHandler,
    input_handler: SharedInputHandler,
}

impl Interpreter {
    /// Standard environment, stdout and stdin.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Captured `ilimbag` output, if the print handler captures.
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }

    /// Execute every top-level statement in order.
    ///
    /// A `lumisan;` outside any loop is absorbed and execution continues
    /// with the next statement. The first error aborts the run.
    pub fn run(&mut self, program: &Program) -> EvalResult<()> {
        debug!(statements = program.stmts.len(), "run");
        for stmt in &program.stmts {
            if self.exec_stmt(stmt)?.is_break() {
                debug!(span = %stmt.span, "lumisan outside a loop ignored");
            }
        }
        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
