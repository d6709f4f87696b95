//! Configuration for the ingestion operations.

use crate::hash::HashAlgorithm;
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Ingestion configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Checksum algorithm used when the caller does not name one.
    #[serde(default)]
    pub default_algorithm: HashAlgorithm,
    /// Ceiling for in-memory buffer collection, in bytes (0 = unbounded).
    #[serde(default = "default_max_buffer_bytes")]
    pub max_buffer_bytes: u64,
    /// Directory for persisted parts. Falls back to the platform temp
    /// directory, re-resolved per allocation, when unset.
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
    /// File name prefix for persisted parts.
    #[serde(default)]
    pub temp_prefix: Option<String>,
    /// Delete the partially written file when a persist operation fails.
    /// Off by default: a failed persist leaves the partial file on disk.
    #[serde(default)]
    pub cleanup_on_failure: bool,
}

fn default_max_buffer_bytes() -> u64 {
    0 // unbounded
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            default_algorithm: HashAlgorithm::default(),
            max_buffer_bytes: default_max_buffer_bytes(),
            temp_dir: None,
            temp_prefix: None,
            cleanup_on_failure: false,
        }
    }
}

impl IngestConfig {
    /// Load configuration from an optional TOML file merged with
    /// `SLUICE_`-prefixed environment variables (nested keys split on `__`).
    /// Environment variables take precedence over the file.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        let config: Self = figment
            .merge(Env::prefixed("SLUICE_").split("__"))
            .extract()
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration invariants.
    pub fn validate(&self) -> crate::Result<()> {
        if let Some(prefix) = &self.temp_prefix {
            if prefix.contains('/') || prefix.contains('\\') {
                return Err(crate::Error::Config(format!(
                    "temp_prefix must not contain path separators: {prefix}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = IngestConfig::default();
        assert_eq!(config.default_algorithm, HashAlgorithm::Md5);
        assert_eq!(config.max_buffer_bytes, 0);
        assert!(config.temp_dir.is_none());
        assert!(config.temp_prefix.is_none());
        assert!(!config.cleanup_on_failure);
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let json = r#"{"max_buffer_bytes": 4096}"#;
        let config: IngestConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_algorithm, HashAlgorithm::Md5);
        assert_eq!(config.max_buffer_bytes, 4096);
        assert!(!config.cleanup_on_failure);
    }

    #[test]
    fn test_deserialize_algorithm_names() {
        let json = r#"{"default_algorithm": "sha256"}"#;
        let config: IngestConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_algorithm, HashAlgorithm::Sha256);
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sluice.toml");
        std::fs::write(
            &path,
            "default_algorithm = \"sha512\"\n\
             max_buffer_bytes = 1048576\n\
             temp_prefix = \"upload-\"\n\
             cleanup_on_failure = true\n",
        )
        .unwrap();

        let config = IngestConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.default_algorithm, HashAlgorithm::Sha512);
        assert_eq!(config.max_buffer_bytes, 1_048_576);
        assert_eq!(config.temp_prefix.as_deref(), Some("upload-"));
        assert!(config.cleanup_on_failure);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = IngestConfig::load(None).unwrap();
        assert_eq!(config.max_buffer_bytes, 0);
    }

    #[test]
    fn test_validate_rejects_prefix_with_separators() {
        let config = IngestConfig {
            temp_prefix: Some("uploads/part-".to_string()),
            ..IngestConfig::default()
        };
        match config.validate() {
            Err(crate::Error::Config(msg)) => assert!(msg.contains("path separators")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }
}
