//! Where `ilimbag` output goes.
//!
//! The binary writes to stdout, tests and embedders capture into a
//! buffer, and `Silent` drops everything. The set is closed, so handlers
//! are an enum rather than a trait object.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes to the process's stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Write `text` and flush, so a `pahingi` prompt shows before input
    /// is read. A closed stdout (`asin prog | head`) is ignored.
    fn write(&self, text: &str) {
        let mut out = io::stdout().lock();
        let _ = out.write_all(text.as_bytes()).and_then(|()| out.flush());
    }
}

/// Accumulates output in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    captured: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    fn write(&self, text: &str) {
        self.captured.lock().push_str(text);
    }

    pub fn get_output(&self) -> String {
        self.captured.lock().clone()
    }
}

pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    Silent,
}

impl PrintHandlerImpl {
    fn write(&self, text: &str) {
        match self {
            Self::Stdout(out) => out.write(text),
            Self::Buffer(buffer) => buffer.write(text),
            Self::Silent => {}
        }
    }

    pub fn println(&self, line: &str) {
        self.write(&format!("{line}\n"));
    }

    /// No trailing newline.
    pub fn print(&self, text: &str) {
        self.write(text);
    }

    /// Everything captured so far. Always empty unless buffering.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(buffer) => buffer.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }
}

/// Print handler shared between an interpreter and its embedder.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
mod tests;
