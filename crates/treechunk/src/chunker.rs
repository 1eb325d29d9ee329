use crate::config::ChunkerConfig;
use crate::error::{ChunkerError, Result};
use crate::line_index::LineIndex;
use crate::node::SyntaxNode;
use crate::span::{ByteSpan, LineSpan};

/// Main chunker interface for splitting parsed source into line ranges
///
/// The pipeline packs sibling node spans up to the configured byte ceiling,
/// closes the trivia gaps between them, coalesces fragments below the
/// meaningfulness threshold, and maps the surviving byte ranges to lines.
#[derive(Debug, Clone)]
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    /// Create a new chunker, rejecting invalid configuration
    pub fn new(config: ChunkerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Chunk a parsed tree into line ranges over `source`
    ///
    /// `source` must be the exact byte buffer the tree was parsed from.
    /// Empty input yields an empty sequence.
    pub fn chunk<N: SyntaxNode>(&self, root: &N, source: &[u8]) -> Result<Vec<LineSpan>> {
        if source.is_empty() {
            return Ok(Vec::new());
        }

        let mut packed = Vec::new();
        pack(root, self.config.max_chunk_size, 0, &mut packed);
        close_gaps(&mut packed);
        let coalesced = coalesce(source, &packed, self.config.coalesce)?;
        log::debug!(
            "coalesced {} packed spans into {} chunks (max_chunk_size={}, coalesce={})",
            packed.len(),
            coalesced.len(),
            self.config.max_chunk_size,
            self.config.coalesce
        );

        let index = LineIndex::new(source);
        Ok(coalesced
            .into_iter()
            .map(|span| index.line_span(span))
            .filter(|lines| !lines.is_empty())
            .collect())
    }

    /// Chunk straight from a tree-sitter parse
    pub fn chunk_tree(&self, tree: &tree_sitter::Tree, source: &[u8]) -> Result<Vec<LineSpan>> {
        self.chunk(&tree.root_node(), source)
    }

    /// Get statistics about a chunking result
    #[must_use]
    pub fn get_stats(spans: &[LineSpan]) -> ChunkingStats {
        let total_lines: usize = spans.iter().map(LineSpan::len).sum();
        ChunkingStats {
            total_chunks: spans.len(),
            total_lines,
            avg_lines_per_chunk: if spans.is_empty() {
                0
            } else {
                total_lines / spans.len()
            },
            min_lines: spans.iter().map(LineSpan::len).min().unwrap_or(0),
            max_lines: spans.iter().map(LineSpan::len).max().unwrap_or(0),
        }
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            config: ChunkerConfig::default(),
        }
    }
}

/// Greedily pack sibling spans into chunks of at most `max_chunk_size` bytes
///
/// An oversized child is split along its own children; before descending, the
/// running chunk is flushed even when empty so emitted order matches source
/// order. An oversized childless leaf is emitted whole: the ceiling is a soft
/// bound and tokens are never split.
fn pack<N: SyntaxNode>(
    node: &N,
    max_chunk_size: usize,
    start_position: usize,
    out: &mut Vec<ByteSpan>,
) {
    let mut current = ByteSpan::empty_at(start_position);

    for index in 0..node.child_count() {
        let Some(child) = node.child(index) else {
            continue;
        };
        let child_span = child.byte_span();

        if child_span.len() > max_chunk_size {
            out.push(current);
            if child.child_count() == 0 {
                out.push(child_span);
            } else {
                pack(&child, max_chunk_size, child_span.start, out);
            }
            current = ByteSpan::empty_at(child_span.end);
        } else if current.len() + child_span.len() > max_chunk_size {
            out.push(current);
            current = child_span;
        } else {
            current = current.absorb(child_span);
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
}

/// Extend each chunk to the start of its successor
///
/// Trivia between siblings (whitespace, comments, delimiters) joins the
/// preceding chunk. The last chunk keeps its own end.
fn close_gaps(spans: &mut [ByteSpan]) {
    for index in 1..spans.len() {
        let next_start = spans[index].start;
        spans[index - 1].end = next_start;
    }
}

/// Merge consecutive chunks until the accumulated text is meaningful
///
/// A chunk is complete once its non-whitespace character count exceeds
/// `threshold` and it contains a newline; anything still accumulated at the
/// end is flushed regardless. An over-threshold accumulation with no newline
/// keeps growing until one arrives.
fn coalesce(source: &[u8], spans: &[ByteSpan], threshold: usize) -> Result<Vec<ByteSpan>> {
    let Some(first) = spans.first() else {
        return Ok(Vec::new());
    };

    let mut out = Vec::new();
    let mut current = ByteSpan::empty_at(first.start);

    for span in spans {
        current = current.absorb(*span);
        let text = span_text(source, current)?;
        if non_whitespace_len(text) > threshold && text.contains('\n') {
            out.push(current);
            current = ByteSpan::empty_at(span.end);
        }
    }

    if !current.is_empty() {
        out.push(current);
    }

    Ok(out)
}

/// Decode the span's bytes as UTF-8, clamping the span to the buffer
fn span_text(source: &[u8], span: ByteSpan) -> Result<&str> {
    let start = span.start.min(source.len());
    let end = span.end.min(source.len()).max(start);
    std::str::from_utf8(&source[start..end])
        .map_err(|err| ChunkerError::malformed_source(span, err))
}

fn non_whitespace_len(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Statistics about a chunking result
#[derive(Debug, Clone)]
pub struct ChunkingStats {
    pub total_chunks: usize,
    pub total_lines: usize,
    pub avg_lines_per_chunk: usize,
    pub min_lines: usize,
    pub max_lines: usize,
}

impl std::fmt::Display for ChunkingStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunks: {} | Lines: {} | Avg: {} | Range: {}-{}",
            self.total_chunks,
            self.total_lines,
            self.avg_lines_per_chunk,
            self.min_lines,
            self.max_lines
        )
    }
}
