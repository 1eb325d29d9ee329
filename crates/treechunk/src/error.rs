use crate::span::ByteSpan;
use thiserror::Error;

/// Result type for chunker operations
pub type Result<T> = std::result::Result<T, ChunkerError>;

/// Errors that can occur while chunking
#[derive(Error, Debug)]
pub enum ChunkerError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Source bytes that must be inspected as text do not decode as UTF-8
    #[error("Malformed source: invalid UTF-8 in {span}: {source}")]
    MalformedSource {
        span: ByteSpan,
        source: std::str::Utf8Error,
    },
}

impl ChunkerError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a malformed source error for the slice that failed to decode
    pub fn malformed_source(span: ByteSpan, source: std::str::Utf8Error) -> Self {
        Self::MalformedSource { span, source }
    }
}
