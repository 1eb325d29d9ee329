use crate::span::{ByteSpan, LineSpan};

/// Precomputed line-start byte offsets for a source buffer
///
/// Lines are terminated by `\n` and each terminator belongs to the line it
/// ends. Lookups binary-search the table, so converting every chunk of a
/// large file stays cheap.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    /// Build the index for `source`
    #[must_use]
    pub fn new(source: &[u8]) -> Self {
        let mut line_starts = if source.is_empty() { Vec::new() } else { vec![0] };
        for (offset, byte) in source.iter().enumerate() {
            if *byte == b'\n' && offset + 1 < source.len() {
                line_starts.push(offset + 1);
            }
        }
        Self {
            line_starts,
            len: source.len(),
        }
    }

    /// Total number of lines in the source
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// 0-indexed line containing byte `offset`
    ///
    /// Offsets at or past the end of the source saturate at the total line
    /// count, so an exclusive byte end maps to an exclusive line end.
    #[must_use]
    pub fn line_of(&self, offset: usize) -> usize {
        if offset >= self.len {
            return self.line_count();
        }
        self.line_starts.partition_point(|&start| start <= offset) - 1
    }

    /// Byte offset where `line` begins
    ///
    /// The one-past-last line maps to the end of the buffer, mirroring the
    /// saturation in [`Self::line_of`].
    #[must_use]
    pub fn line_start(&self, line: usize) -> usize {
        self.line_starts.get(line).copied().unwrap_or(self.len)
    }

    /// Convert a byte range to the line range containing it
    ///
    /// This is the only bridge between the two span domains.
    #[must_use]
    pub fn line_span(&self, span: ByteSpan) -> LineSpan {
        LineSpan::new(self.line_of(span.start), self.line_of(span.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_lines_with_and_without_trailing_newline() {
        assert_eq!(LineIndex::new(b"").line_count(), 0);
        assert_eq!(LineIndex::new(b"a").line_count(), 1);
        assert_eq!(LineIndex::new(b"\n").line_count(), 1);
        assert_eq!(LineIndex::new(b"a\nb").line_count(), 2);
        assert_eq!(LineIndex::new(b"a\nb\n").line_count(), 2);
        assert_eq!(LineIndex::new(b"\n\n").line_count(), 2);
    }

    #[test]
    fn maps_offsets_to_containing_lines() {
        let index = LineIndex::new(b"a\nb\n");
        assert_eq!(index.line_of(0), 0);
        assert_eq!(index.line_of(1), 0);
        assert_eq!(index.line_of(2), 1);
        assert_eq!(index.line_of(3), 1);
    }

    #[test]
    fn terminator_byte_belongs_to_its_line() {
        let index = LineIndex::new(b"ab\ncd\n");
        assert_eq!(index.line_of(2), 0);
        assert_eq!(index.line_of(5), 1);
    }

    #[test]
    fn offsets_past_the_end_saturate_at_line_count() {
        let index = LineIndex::new(b"a\nb\n");
        assert_eq!(index.line_of(4), 2);
        assert_eq!(index.line_of(100), 2);

        let no_terminator = LineIndex::new(b"a\nb");
        assert_eq!(no_terminator.line_of(3), 2);
        assert_eq!(no_terminator.line_of(50), 2);
    }

    #[test]
    fn empty_source_maps_everything_to_line_zero() {
        let index = LineIndex::new(b"");
        assert_eq!(index.line_count(), 0);
        assert_eq!(index.line_of(0), 0);
        assert_eq!(index.line_of(7), 0);
    }

    #[test]
    fn crlf_splits_at_the_newline_byte() {
        let index = LineIndex::new(b"a\r\nb");
        assert_eq!(index.line_count(), 2);
        assert_eq!(index.line_of(1), 0);
        assert_eq!(index.line_of(2), 0);
        assert_eq!(index.line_of(3), 1);
    }

    #[test]
    fn carriage_return_alone_is_not_a_boundary() {
        let index = LineIndex::new(b"a\rb\rc");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_of(4), 0);
        assert_eq!(index.line_span(ByteSpan::new(0, 5)), LineSpan::new(0, 1));
    }

    #[test]
    fn lookups_are_pure() {
        let index = LineIndex::new(b"one\ntwo\nthree\n");
        let first = index.line_of(9);
        let second = index.line_of(9);
        assert_eq!(first, second);
    }

    #[test]
    fn line_start_inverts_line_of() {
        let index = LineIndex::new(b"one\ntwo\nthree");
        assert_eq!(index.line_start(0), 0);
        assert_eq!(index.line_start(1), 4);
        assert_eq!(index.line_start(2), 8);
        assert_eq!(index.line_start(3), 13);
        assert_eq!(index.line_start(99), 13);
    }

    #[test]
    fn converts_byte_spans_to_line_spans() {
        let index = LineIndex::new(b"a\nb\nc\n");
        assert_eq!(index.line_span(ByteSpan::new(0, 4)), LineSpan::new(0, 2));
        assert_eq!(index.line_span(ByteSpan::new(0, 6)), LineSpan::new(0, 3));
        assert_eq!(index.line_span(ByteSpan::new(2, 3)), LineSpan::new(1, 1));
    }
}
