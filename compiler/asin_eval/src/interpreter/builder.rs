//! `InterpreterBuilder` for creating interpreters with custom handlers.

use super::Interpreter;
use crate::environment::Environment;
use crate::input_handler::{stdin_handler, SharedInputHandler};
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// Defaults: the standard environment, stdout for `ilimbag`, stdin for
/// `pahingi`.
#[derive(Default)]
pub struct InterpreterBuilder {
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
    input_handler: Option<SharedInputHandler>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial environment.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn input_handler(mut self, handler: SharedInputHandler) -> Self {
        self.input_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            env: self.env.unwrap_or_else(Environment::new),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            input_handler: self.input_handler.unwrap_or_else(stdin_handler),
        }
    }
}
