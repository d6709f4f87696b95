//! Shared helpers for building byte sources in tests.

use bytes::Bytes;
use futures::stream;
use sluice_ingest::ByteStream;
use std::io;

/// A source that yields the given chunks and then ends normally.
#[allow(dead_code)]
pub fn chunk_source(chunks: Vec<Bytes>) -> ByteStream {
    let items: Vec<io::Result<Bytes>> = chunks.into_iter().map(Ok).collect();
    Box::pin(stream::iter(items))
}

/// A source that yields the given chunks and then reports an error.
#[allow(dead_code)]
pub fn failing_source(chunks: Vec<Bytes>, message: &str) -> ByteStream {
    let mut items: Vec<io::Result<Bytes>> = chunks.into_iter().map(Ok).collect();
    items.push(Err(io::Error::other(message.to_string())));
    Box::pin(stream::iter(items))
}

/// A source that ends immediately, emitting no chunks.
#[allow(dead_code)]
pub fn empty_source() -> ByteStream {
    chunk_source(Vec::new())
}
