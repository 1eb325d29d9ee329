//! # Treechunk
//!
//! Syntax-tree-aware chunking that splits a parsed source file into
//! retrieval-sized line ranges.
//!
//! ## Pipeline
//!
//! ```text
//! Syntax tree + source bytes
//!     │
//!     ├──> Span packing (greedy over siblings, bounded by max_chunk_size,
//!     │                  recursing into oversized nodes)
//!     ├──> Gap closing (trivia between siblings joins the preceding chunk)
//!     ├──> Coalescing (fragments below the coalesce threshold merge onward)
//!     └──> Line mapping (byte offsets → 0-indexed, end-exclusive line spans)
//! ```
//!
//! The chunker never parses source itself and never inspects node kinds: any
//! tree whose nodes expose byte ranges and ordered children can implement
//! [`SyntaxNode`]. An implementation for [`tree_sitter::Node`] is provided.
//!
//! ## Example
//!
//! ```rust
//! use treechunk::{Chunker, ChunkerConfig};
//!
//! let source = b"fn add(a: i32, b: i32) -> i32 {\n    a + b\n}\n";
//!
//! let mut parser = tree_sitter::Parser::new();
//! parser
//!     .set_language(&tree_sitter_rust::LANGUAGE.into())
//!     .unwrap();
//! let tree = parser.parse(source, None).unwrap();
//!
//! let chunker = Chunker::new(ChunkerConfig::default()).unwrap();
//! let spans = chunker.chunk_tree(&tree, source).unwrap();
//! for span in &spans {
//!     println!("{span}");
//! }
//! ```

mod chunker;
mod config;
mod error;
mod line_index;
mod node;
mod span;

pub use chunker::{Chunker, ChunkingStats};
pub use config::{ChunkerConfig, DEFAULT_COALESCE, DEFAULT_MAX_CHUNK_SIZE};
pub use error::{ChunkerError, Result};
pub use line_index::LineIndex;
pub use node::SyntaxNode;
pub use span::{ByteSpan, LineSpan};
