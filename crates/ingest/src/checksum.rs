//! File and stream checksums.

use crate::error::{IngestError, IngestResult};
use crate::source::{ByteStream, file_source};
use futures::StreamExt;
use sluice_core::hash::{Digest, HashAlgorithm};
use std::path::Path;
use tracing::instrument;

/// Digest a file's contents under the named algorithm (default: md5).
///
/// The algorithm name is validated against the supported set before any I/O;
/// an unknown name fails fast with [`IngestError::UnsupportedAlgorithm`].
/// Open and read failures surface as [`IngestError::SourceRead`].
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub async fn file_digest(
    path: impl AsRef<Path>,
    algorithm: Option<&str>,
) -> IngestResult<Digest> {
    let algorithm = match algorithm {
        Some(name) => HashAlgorithm::parse(name)
            .map_err(|_| IngestError::UnsupportedAlgorithm(name.to_string()))?,
        None => HashAlgorithm::default(),
    };

    let stream = file_source(path).await.map_err(IngestError::SourceRead)?;
    digest_stream(stream, algorithm).await
}

/// Fold every chunk of a byte source into a running hash state and yield the
/// digest on source completion.
#[instrument(skip(stream))]
pub async fn digest_stream(
    mut stream: ByteStream,
    algorithm: HashAlgorithm,
) -> IngestResult<Digest> {
    let mut hasher = algorithm.hasher();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(IngestError::SourceRead)?;
        hasher.update(&chunk);
    }
    Ok(hasher.finalize())
}
