//! Terminal Emitter
//!
//! Renders diagnostics the way `rustc` does: a header line, then for each
//! label a `--> path:line:col` locator and the offending source line with
//! an underline, then the footers. Without program text, labels fall back
//! to raw byte ranges.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Footer, Label};

use super::DiagnosticEmitter;

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
enum Style {
    Error,
    Gutter,
    Bold,
    Help,
}

impl Style {
    fn ansi(self) -> &'static str {
        match self {
            Style::Error => "\x1b[1;31m",
            Style::Gutter => "\x1b[1;34m",
            Style::Bold => "\x1b[1m",
            Style::Help => "\x1b[1;32m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Program text labels are resolved against.
struct Source {
    path: String,
    text: String,
    lines: LineOffsetTable,
}

/// One label resolved to a line of program text.
struct Snippet<'s> {
    line: u32,
    column: u32,
    line_text: &'s str,
    /// Underline width in characters, at least one.
    width: usize,
}

impl Source {
    fn snippet(&self, label: &Label) -> Snippet<'_> {
        let (line, column) = self.lines.offset_to_line_col(&self.text, label.span.start);
        let line_text = self.lines.line_text(&self.text, line).unwrap_or("");
        // Multi-line spans are underlined to the end of their first line.
        let span_chars = self
            .text
            .get(label.span.to_range())
            .map_or(0, |s| s.chars().take_while(|&c| c != '\n').count());
        let room = line_text
            .chars()
            .count()
            .saturating_sub(column.saturating_sub(1) as usize);
        Snippet {
            line,
            column,
            line_text,
            width: span_chars.min(room).max(1),
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<Source>,
}

impl<W: Write> TerminalEmitter<W> {
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the program text so labels render as snippets.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        self.source = Some(Source {
            path: path.into(),
            lines: LineOffsetTable::build(&text),
            text,
        });
        self
    }

    /// Consume the emitter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&mut self, style: Style, text: &str) {
        let _ = if self.colors {
            write!(self.writer, "{}{text}{RESET}", style.ansi())
        } else {
            write!(self.writer, "{text}")
        };
    }

    fn label_style(label: &Label) -> Style {
        if label.is_primary {
            Style::Error
        } else {
            Style::Gutter
        }
    }

    fn write_label(&mut self, label: &Label) {
        let style = Self::label_style(label);
        let Some(source) = self.source.take() else {
            let _ = write!(self.writer, "  --> {}: ", label.span);
            self.paint(style, &label.message);
            let _ = writeln!(self.writer);
            return;
        };

        let snippet = source.snippet(label);
        let pad = " ".repeat(snippet.line.to_string().len());

        let _ = write!(self.writer, "{pad}");
        self.paint(Style::Gutter, "-->");
        let _ = writeln!(
            self.writer,
            " {}:{}:{}",
            source.path, snippet.line, snippet.column
        );

        self.paint(Style::Gutter, &format!("{pad} |"));
        let _ = writeln!(self.writer);
        self.paint(Style::Gutter, &format!("{} |", snippet.line));
        let _ = writeln!(self.writer, " {}", snippet.line_text);

        self.paint(Style::Gutter, &format!("{pad} |"));
        let indent = " ".repeat(snippet.column.saturating_sub(1) as usize);
        let _ = write!(self.writer, " {indent}");
        let marker = if label.is_primary { "^" } else { "-" };
        self.paint(style, &marker.repeat(snippet.width));
        if !label.message.is_empty() {
            let _ = write!(self.writer, " ");
            self.paint(style, &label.message);
        }
        let _ = writeln!(self.writer);

        self.source = Some(source);
    }

    fn write_footer(&mut self, footer: &Footer) {
        let style = match footer {
            Footer::Note(_) => Style::Bold,
            Footer::Help(_) => Style::Help,
        };
        let _ = write!(self.writer, "  = ");
        self.paint(style, footer.keyword());
        let _ = writeln!(self.writer, ": {}", footer.text());
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.paint(Style::Error, "error");
        self.paint(Style::Bold, &format!("[{}]", diagnostic.code.as_str()));
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }
        for footer in &diagnostic.footers {
            self.write_footer(footer);
        }
        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
