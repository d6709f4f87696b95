//! Persisting a named part to a temporary file.

use crate::error::{IngestError, IngestResult};
use crate::source::{ByteStream, StreamPart};
use futures::StreamExt;
use sluice_core::IngestConfig;
use sluice_core::temp::temp_file_name;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::instrument;

/// Options controlling where and how a part is persisted.
#[derive(Clone, Debug, Default)]
pub struct PersistOptions {
    /// File name prefix for the allocated temp path.
    pub prefix: Option<String>,
    /// Destination directory; the platform temp directory, re-resolved per
    /// call, when unset.
    pub temp_dir: Option<PathBuf>,
    /// Delete the partially written file when the operation fails.
    /// Off by default: a failed persist leaves the partial file on disk.
    pub cleanup_on_failure: bool,
}

impl PersistOptions {
    /// Build options from configuration.
    pub fn from_config(config: &IngestConfig) -> Self {
        Self {
            prefix: config.temp_prefix.clone(),
            temp_dir: config.temp_dir.clone(),
            cleanup_on_failure: config.cleanup_on_failure,
        }
    }
}

/// Metadata for a persisted part.
///
/// The file at `path` belongs to the caller once this is returned; nothing
/// here deletes it or keeps a handle to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedPart {
    /// Path of the written file.
    pub path: PathBuf,
    /// Declared file name, passed through from the part.
    pub file_name: Option<String>,
    /// Declared content type, passed through from the part.
    pub content_type: Option<String>,
    /// Observed size in bytes.
    pub size: u64,
}

/// Write a part's byte stream to a uniquely-named temporary file.
///
/// Writes are serialized: chunk `n + 1` is not polled until chunk `n` has
/// been acknowledged by the filesystem, bounding in-flight memory to one
/// chunk per invocation. On completion the file is flushed and closed and
/// the observed size returned alongside the part's declared metadata.
#[instrument(skip(part, options), fields(file_name = ?part.file_name))]
pub async fn persist_part(part: StreamPart, options: &PersistOptions) -> IngestResult<SavedPart> {
    let dir = options.temp_dir.clone().unwrap_or_else(std::env::temp_dir);
    let path = dir.join(temp_file_name(options.prefix.as_deref()));

    let StreamPart {
        stream,
        file_name,
        content_type,
    } = part;

    match write_to(&path, stream).await {
        Ok(size) => Ok(SavedPart {
            path,
            file_name,
            content_type,
            size,
        }),
        Err(err) => {
            if options.cleanup_on_failure {
                remove_partial(&path).await;
            }
            Err(err)
        }
    }
}

/// Serialized write loop: each chunk is counted, written, and acknowledged
/// before the next one is polled.
async fn write_to(path: &Path, mut stream: ByteStream) -> IngestResult<u64> {
    let mut file = fs::File::create(path)
        .await
        .map_err(IngestError::DestinationWrite)?;
    let mut size: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(IngestError::SourceRead)?;
        size += chunk.len() as u64;
        file.write_all(&chunk)
            .await
            .map_err(IngestError::DestinationWrite)?;
    }

    file.flush().await.map_err(IngestError::DestinationWrite)?;
    Ok(size)
}

/// Best-effort removal of a partial file; the original failure is what the
/// caller sees either way.
async fn remove_partial(path: &Path) {
    match fs::remove_file(path).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to remove partial file"
            );
        }
    }
}
