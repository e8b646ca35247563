//! The `Diagnostic` report type.
//!
//! Asin only reports errors, so a diagnostic has no severity: it is an
//! error code, the classic one-line message, labels into the program text,
//! and footers with background or a likely fix.

use std::fmt;

use asin_ir::Span;

use crate::ErrorCode;

/// A span of program text with a short explanation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    /// Primary labels mark where the error arose; secondary labels point at
    /// related code, such as the `{` of a block that never closes.
    pub is_primary: bool,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A remark printed after the snippet.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Footer {
    /// Background on the rule that was broken.
    Note(String),
    /// A probable fix, e.g. a similarly named variable.
    Help(String),
}

impl Footer {
    pub fn keyword(&self) -> &'static str {
        match self {
            Footer::Note(_) => "note",
            Footer::Help(_) => "help",
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Footer::Note(text) | Footer::Help(text) => text,
        }
    }
}

impl fmt::Display for Footer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.keyword(), self.text())
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    /// The classic `(Class) : detail` message.
    pub message: String,
    pub labels: Vec<Label>,
    pub footers: Vec<Footer>,
}

impl Diagnostic {
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            footers: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Mark the error location.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.footers.push(Footer::Note(note.into()));
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.footers.push(Footer::Help(help.into()));
        self
    }

    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find_map(|label| label.is_primary.then_some(label.span))
    }
}

/// Plain rendering without program text, e.g. `error[E6003]: …` followed
/// by `--> 4..10: division by zero`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code.as_str(), self.message)?;
        for label in &self.labels {
            let arrow = if label.is_primary { "-->" } else { "..." };
            write!(f, "\n  {arrow} {}: {}", label.span, label.message)?;
        }
        for footer in &self.footers {
            write!(f, "\n  = {footer}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
