//! Ingestion error types.

use thiserror::Error;

/// Errors surfaced by the ingestion operations.
///
/// Every failure is terminal for its operation instance; nothing is retried
/// internally and no partial result accompanies an error.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("source read error: {0}")]
    SourceRead(#[source] std::io::Error),

    #[error("maximum length exceeded: {limit} bytes")]
    MaxLengthExceeded { limit: u64 },

    #[error("destination write error: {0}")]
    DestinationWrite(#[source] std::io::Error),
}

/// Result type for ingestion operations.
pub type IngestResult<T> = std::result::Result<T, IngestError>;
