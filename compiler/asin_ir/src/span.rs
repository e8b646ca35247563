//! Byte-offset spans into program text.
//!
//! Lines and columns are not stored; `asin_diagnostic::LineOffsetTable`
//! derives them when an error is rendered.

use std::fmt;
use std::ops::Range;

/// Half-open byte range `start..end`, 8 bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// For nodes built by hand rather than parsed.
    pub const DUMMY: Span = Span::point(0);

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Empty span at `offset`. End of input is reported this way.
    #[inline]
    pub const fn point(offset: u32) -> Self {
        Span::new(offset, offset)
    }

    /// From a lexer range. Offsets beyond `u32::MAX` saturate.
    pub fn from_range(range: Range<usize>) -> Self {
        let clamp = |offset: usize| u32::try_from(offset).unwrap_or(u32::MAX);
        Span::new(clamp(range.start), clamp(range.end))
    }

    /// Smallest span covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    #[inline]
    pub fn to_range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

// AST dumps stay readable with the short form.
impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}
