//! Where `pahingi` reads lines from.
//!
//! Mirrors the print handler: stdin for the binary, a scripted queue of
//! lines for tests and embedding.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::Arc;

use parking_lot::Mutex;

/// Reads from the process's stdin.
#[derive(Default)]
pub struct StdinInputHandler;

impl StdinInputHandler {
    /// Next line with its terminator, or `None` at end of input.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        Ok((read > 0).then_some(line))
    }
}

/// Serves a fixed sequence of lines, then end of input.
#[derive(Default)]
pub struct ScriptedInputHandler {
    lines: Mutex<VecDeque<String>>,
}

impl ScriptedInputHandler {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInputHandler {
            lines: Mutex::new(lines.into_iter().map(Into::into).collect()),
        }
    }

    pub fn read_line(&self) -> Option<String> {
        self.lines.lock().pop_front()
    }
}

pub enum InputHandlerImpl {
    Stdin(StdinInputHandler),
    Scripted(ScriptedInputHandler),
}

impl InputHandlerImpl {
    pub fn read_line(&self) -> io::Result<Option<String>> {
        match self {
            Self::Stdin(h) => h.read_line(),
            Self::Scripted(h) => Ok(h.read_line()),
        }
    }
}

pub type SharedInputHandler = Arc<InputHandlerImpl>;

pub fn stdin_handler() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Stdin(StdinInputHandler))
}

pub fn scripted_handler<I, S>(lines: I) -> SharedInputHandler
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Arc::new(InputHandlerImpl::Scripted(ScriptedInputHandler::new(lines)))
}
