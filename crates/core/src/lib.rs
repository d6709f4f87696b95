//! Core domain types for the sluice stream ingestion toolkit.
//!
//! This crate defines the leaves shared by the ingestion operations:
//! - Hash algorithm registry and digest values
//! - Temporary path allocation
//! - Configuration
//! - Core error type

pub mod config;
pub mod error;
pub mod hash;
pub mod temp;

pub use config::IngestConfig;
pub use error::{Error, Result};
pub use hash::{Digest, HashAlgorithm, StreamHasher};
pub use temp::{alloc_temp_path, temp_file_name};
