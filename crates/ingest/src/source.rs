//! Byte source boundary types.

use bytes::Bytes;
use futures::Stream;
use std::fmt;
use std::io;
use std::path::Path;
use std::pin::Pin;
use tokio::fs;
use tokio::io::AsyncReadExt;

/// A boxed push-based producer of binary chunks.
///
/// A well-formed source delivers zero or more data items followed by exactly
/// one terminal event: end of stream, or a single `Err` item.
pub type ByteStream = Pin<Box<dyn Stream<Item = io::Result<Bytes>> + Send>>;

/// One named part of an upload: a byte stream plus caller-declared metadata.
///
/// The declared file name and content type are passed through as-is; they
/// are never checked against the actual bytes.
pub struct StreamPart {
    /// The part's byte stream.
    pub stream: ByteStream,
    /// Declared file name, if any.
    pub file_name: Option<String>,
    /// Declared content type, if any.
    pub content_type: Option<String>,
}

impl StreamPart {
    /// Create a part with no declared metadata.
    pub fn new(stream: ByteStream) -> Self {
        Self {
            stream,
            file_name: None,
            content_type: None,
        }
    }
}

impl fmt::Debug for StreamPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamPart")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

/// Open a file as a byte source, streaming fixed-size chunks.
pub async fn file_source(path: impl AsRef<Path>) -> io::Result<ByteStream> {
    let file = fs::File::open(path.as_ref()).await?;

    let stream = async_stream::try_stream! {
        let mut file = file;
        let mut buf = vec![0u8; crate::STREAM_CHUNK_SIZE];
        loop {
            let n = file.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            yield Bytes::copy_from_slice(&buf[..n]);
        }
    };

    Ok(Box::pin(stream))
}
