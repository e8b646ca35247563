//! Line and column lookup for spans.
//!
//! Lexical and syntax errors quote the line and column of the offending
//! token together with the full source line, and the terminal emitter
//! renders `--> file:line:col` headers. Both go through [`LineOffsetTable`].

use asin_ir::Span;

/// Pre-computed line offset table for line/column lookup.
///
/// ```
/// use asin_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "x = 1;\nilimbag(x);";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 7), (2, 1));
/// assert_eq!(table.line_text(source, 2), Some("ilimbag(x);"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line number containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based (line, column); the column counts characters, not bytes.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self.line_start_offset(line).unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());

        let prefix = source.get(line_start..end).unwrap_or("");
        let col = u32::try_from(prefix.chars().count()).unwrap_or(u32::MAX - 1) + 1;

        (line, col)
    }

    /// Byte offset of a 1-based line start.
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    /// Text of a 1-based line without its terminator.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> Option<&'s str> {
        let start = self.line_start_offset(line)? as usize;
        let rest = source.get(start..)?;
        let text = rest.split('\n').next().unwrap_or("");
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

/// Resolved position of a span start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
    /// The full source line containing the position.
    pub line_text: String,
}

impl SourceLocation {
    /// Locate the start of `span` in `source`.
    pub fn of_span(source: &str, span: Span) -> Self {
        Self::with_table(&LineOffsetTable::build(source), source, span)
    }

    /// Locate using a pre-built table.
    pub fn with_table(table: &LineOffsetTable, source: &str, span: Span) -> Self {
        let (line, column) = table.offset_to_line_col(source, span.start);
        let line_text = table.line_text(source, line).unwrap_or("").to_owned();
        SourceLocation {
            line,
            column,
            line_text,
        }
    }
}

#[cfg(test)]
mod tests;
