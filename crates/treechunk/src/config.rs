use crate::error::{ChunkerError, Result};
use serde::{Deserialize, Serialize};

/// Default soft ceiling, in bytes, for one structural chunk
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 512 * 3;

/// Default non-whitespace character count before a chunk is complete
pub const DEFAULT_COALESCE: usize = 50;

/// Configuration for chunking behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Soft byte-length ceiling per structural chunk
    ///
    /// Sibling nodes are packed up to this size and larger nodes are split
    /// along their children. A single leaf over the ceiling is still emitted
    /// whole rather than split mid-token.
    pub max_chunk_size: usize,

    /// Minimum non-whitespace character count, with a newline present,
    /// before an accumulated chunk is emitted instead of growing further
    pub coalesce: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            coalesce: DEFAULT_COALESCE,
        }
    }
}

impl ChunkerConfig {
    /// Create a config with explicit bounds
    #[must_use]
    pub const fn new(max_chunk_size: usize, coalesce: usize) -> Self {
        Self {
            max_chunk_size,
            coalesce,
        }
    }

    /// Builder: set the byte ceiling per structural chunk
    #[must_use]
    pub const fn with_max_chunk_size(mut self, max_chunk_size: usize) -> Self {
        self.max_chunk_size = max_chunk_size;
        self
    }

    /// Builder: set the coalesce threshold
    #[must_use]
    pub const fn with_coalesce(mut self, coalesce: usize) -> Self {
        self.coalesce = coalesce;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_chunk_size == 0 {
            return Err(ChunkerError::invalid_config(
                "max_chunk_size must be > 0",
            ));
        }
        Ok(())
    }
}
