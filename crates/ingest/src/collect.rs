//! Bounded in-memory collection of a byte source.

use crate::error::{IngestError, IngestResult};
use crate::source::ByteStream;
use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use tracing::instrument;

/// Collect a byte source into a single contiguous buffer.
///
/// `max_len` of `None` or `Some(0)` collects without a ceiling. With a limit
/// configured, the operation fails with [`IngestError::MaxLengthExceeded`] as
/// soon as the running total exceeds it; the check fires after each chunk,
/// before any later event is polled, so a breach always wins over a
/// subsequent source error. A total exactly equal to the limit is accepted.
///
/// On success the buffer is the byte-exact, order-preserving concatenation
/// of every chunk the source emitted.
#[instrument(skip(stream))]
pub async fn collect_bounded(mut stream: ByteStream, max_len: Option<u64>) -> IngestResult<Bytes> {
    let limit = max_len.unwrap_or(0);
    let mut buf = BytesMut::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(IngestError::SourceRead)?;
        buf.extend_from_slice(&chunk);
        if limit > 0 && buf.len() as u64 > limit {
            return Err(IngestError::MaxLengthExceeded { limit });
        }
    }

    Ok(buf.freeze())
}
