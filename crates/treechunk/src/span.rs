use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open `[start, end)` range of byte offsets into a source buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ByteSpan {
    /// First byte offset covered
    pub start: usize,

    /// One past the last byte offset covered
    pub end: usize,
}

impl ByteSpan {
    /// Create a new byte span
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a zero-length span anchored at `position`
    #[must_use]
    pub const fn empty_at(position: usize) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Number of bytes covered
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check whether the span covers no bytes
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Extend this span to the end of `other`, bridging any gap in between
    #[must_use]
    pub const fn absorb(self, other: Self) -> Self {
        Self {
            start: self.start,
            end: other.end,
        }
    }

    /// Move both bounds forward by `offset` bytes, saturating at `usize::MAX`
    #[must_use]
    pub const fn shifted(self, offset: usize) -> Self {
        Self {
            start: self.start.saturating_add(offset),
            end: self.end.saturating_add(offset),
        }
    }
}

impl fmt::Display for ByteSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bytes {}..{}", self.start, self.end)
    }
}

/// A half-open `[start, end)` range of 0-indexed line numbers
///
/// Produced by [`crate::LineIndex::line_span`], the only conversion from the
/// byte domain. Consumers slice a file's lines as `lines[start..end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineSpan {
    /// First line covered (0-indexed)
    pub start: usize,

    /// One past the last line covered
    pub end: usize,
}

impl LineSpan {
    /// Create a new line span
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of lines covered
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check whether the span covers no lines
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Extract the covered lines from `text`, joined with `\n`
    ///
    /// Lines past the end of `text` are treated as absent, so an
    /// out-of-range span extracts an empty string.
    #[must_use]
    pub fn extract(&self, text: &str) -> String {
        text.lines()
            .skip(self.start)
            .take(self.len())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for LineSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lines {}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_span_length() {
        assert_eq!(ByteSpan::new(3, 10).len(), 7);
        assert_eq!(ByteSpan::new(5, 5).len(), 0);
        assert!(ByteSpan::empty_at(9).is_empty());
        assert!(!ByteSpan::new(0, 1).is_empty());
    }

    #[test]
    fn absorb_extends_to_the_right_operand_end() {
        let left = ByteSpan::new(0, 4);
        let right = ByteSpan::new(6, 12);
        assert_eq!(left.absorb(right), ByteSpan::new(0, 12));
    }

    #[test]
    fn absorb_of_adjacent_spans_is_their_union() {
        let left = ByteSpan::new(2, 5);
        let right = ByteSpan::new(5, 9);
        assert_eq!(left.absorb(right), ByteSpan::new(2, 9));
    }

    #[test]
    fn shifted_moves_both_bounds() {
        assert_eq!(ByteSpan::new(1, 4).shifted(10), ByteSpan::new(11, 14));
        assert_eq!(
            ByteSpan::new(1, 4).shifted(usize::MAX),
            ByteSpan::new(usize::MAX, usize::MAX)
        );
    }

    #[test]
    fn spans_order_by_start_then_end() {
        assert!(ByteSpan::new(0, 9) < ByteSpan::new(1, 2));
        assert!(ByteSpan::new(3, 4) < ByteSpan::new(3, 8));
        assert!(LineSpan::new(0, 2) < LineSpan::new(1, 1));
    }

    #[test]
    fn display_names_the_domain() {
        assert_eq!(ByteSpan::new(2, 8).to_string(), "bytes 2..8");
        assert_eq!(LineSpan::new(0, 3).to_string(), "lines 0..3");
    }

    #[test]
    fn extract_joins_covered_lines() {
        let text = "alpha\nbeta\ngamma\n";
        assert_eq!(LineSpan::new(0, 2).extract(text), "alpha\nbeta");
        assert_eq!(LineSpan::new(1, 3).extract(text), "beta\ngamma");
        assert_eq!(LineSpan::new(0, 3).extract(text), "alpha\nbeta\ngamma");
    }

    #[test]
    fn extract_out_of_range_is_empty() {
        let text = "one\ntwo";
        assert_eq!(LineSpan::new(5, 9).extract(text), "");
        assert_eq!(LineSpan::new(1, 1).extract(text), "");
        assert_eq!(LineSpan::new(0, 0).extract(""), "");
    }
}
