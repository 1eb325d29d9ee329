use crate::span::ByteSpan;

/// Read-only view of one node in an externally parsed syntax tree
///
/// The chunker walks any tree whose nodes expose a byte range and an ordered
/// child sequence; it never mutates the tree and never looks at node kinds or
/// text. An implementation for [`tree_sitter::Node`] is provided, and test
/// suites can supply synthetic trees.
pub trait SyntaxNode: Sized {
    /// Byte offset where this node's text begins
    fn start_byte(&self) -> usize;

    /// Byte offset one past the end of this node's text
    fn end_byte(&self) -> usize;

    /// Number of children, in source order
    fn child_count(&self) -> usize;

    /// The `index`-th child, or `None` past the last one
    fn child(&self, index: usize) -> Option<Self>;

    /// This node's byte range
    fn byte_span(&self) -> ByteSpan {
        ByteSpan::new(self.start_byte(), self.end_byte())
    }
}

impl SyntaxNode for tree_sitter::Node<'_> {
    fn start_byte(&self) -> usize {
        tree_sitter::Node::start_byte(self)
    }

    fn end_byte(&self) -> usize {
        tree_sitter::Node::end_byte(self)
    }

    fn child_count(&self) -> usize {
        tree_sitter::Node::child_count(self)
    }

    fn child(&self, index: usize) -> Option<Self> {
        tree_sitter::Node::child(self, index)
    }
}
