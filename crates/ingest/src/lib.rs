//! One-shot stream ingestion operations.
//!
//! This crate consumes push-based byte sources and resolves each operation to
//! exactly one terminal outcome:
//! - [`file_digest`] — hex digest of a file under a selectable algorithm
//! - [`collect_bounded`] — in-memory buffer bounded by a maximum size
//! - [`persist_part`] — named part written to a uniquely-named temp file
//!
//! Sources are consumed by value, so an operation can never be replayed
//! against a stream it has already drained. Failures are terminal and carry
//! no partial result; retry means re-invoking with a fresh source. A source
//! aborted by the caller must surface as a stream error item, which the
//! operations treat like any other source error.

pub mod checksum;
pub mod collect;
pub mod error;
pub mod persist;
pub mod source;

pub use checksum::{digest_stream, file_digest};
pub use collect::collect_bounded;
pub use error::{IngestError, IngestResult};
pub use persist::{PersistOptions, SavedPart, persist_part};
pub use source::{ByteStream, StreamPart, file_source};

/// Chunk size for streaming file reads (64 KiB).
pub const STREAM_CHUNK_SIZE: usize = 64 * 1024;
