//! Hash algorithm registry and digest values.

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest as _, Sha256, Sha512};
use std::fmt;

/// Hash algorithms accepted by the checksum operations.
///
/// The set is fixed; anything outside it is rejected before any I/O starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// MD5 (the default for file checksums).
    #[default]
    Md5,
    /// SHA-1.
    Sha1,
    /// SHA-256.
    Sha256,
    /// SHA-512.
    Sha512,
}

impl HashAlgorithm {
    /// Parse an algorithm name, case-insensitively.
    ///
    /// `sha-1`/`sha-256`/`sha-512` are accepted as aliases for the dashless
    /// names.
    pub fn parse(s: &str) -> crate::Result<Self> {
        if s.eq_ignore_ascii_case("md5") {
            Ok(Self::Md5)
        } else if s.eq_ignore_ascii_case("sha1") || s.eq_ignore_ascii_case("sha-1") {
            Ok(Self::Sha1)
        } else if s.eq_ignore_ascii_case("sha256") || s.eq_ignore_ascii_case("sha-256") {
            Ok(Self::Sha256)
        } else if s.eq_ignore_ascii_case("sha512") || s.eq_ignore_ascii_case("sha-512") {
            Ok(Self::Sha512)
        } else {
            Err(crate::Error::UnsupportedAlgorithm(s.to_string()))
        }
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// Create an incremental hasher for this algorithm.
    pub fn hasher(&self) -> StreamHasher {
        let state = match self {
            Self::Md5 => HasherState::Md5(Md5::new()),
            Self::Sha1 => HasherState::Sha1(Sha1::new()),
            Self::Sha256 => HasherState::Sha256(Sha256::new()),
            Self::Sha512 => HasherState::Sha512(Sha512::new()),
        };
        StreamHasher(state)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

enum HasherState {
    Md5(Md5),
    Sha1(Sha1),
    Sha256(Sha256),
    Sha512(Sha512),
}

/// Incremental hasher folding successive chunks into one digest.
pub struct StreamHasher(HasherState);

impl StreamHasher {
    /// Update the hasher with data.
    pub fn update(&mut self, data: &[u8]) {
        match &mut self.0 {
            HasherState::Md5(h) => h.update(data),
            HasherState::Sha1(h) => h.update(data),
            HasherState::Sha256(h) => h.update(data),
            HasherState::Sha512(h) => h.update(data),
        }
    }

    /// Finalize and return the digest.
    pub fn finalize(self) -> Digest {
        let (algorithm, bytes) = match self.0 {
            HasherState::Md5(h) => (HashAlgorithm::Md5, h.finalize().to_vec()),
            HasherState::Sha1(h) => (HashAlgorithm::Sha1, h.finalize().to_vec()),
            HasherState::Sha256(h) => (HashAlgorithm::Sha256, h.finalize().to_vec()),
            HasherState::Sha512(h) => (HashAlgorithm::Sha512, h.finalize().to_vec()),
        };
        Digest {
            algorithm,
            hex: to_hex(&bytes),
        }
    }
}

/// A finished digest: the algorithm and its lowercase hex rendering.
///
/// Created once, at stream completion; never mutated.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest {
    algorithm: HashAlgorithm,
    hex: String,
}

impl Digest {
    /// The algorithm that produced this digest.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// The lowercase hex rendering.
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Consume into the hex string.
    pub fn into_string(self) -> String {
        self.hex
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = &self.hex[..self.hex.len().min(16)];
        write!(f, "Digest({}:{})", self.algorithm, head)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex)
    }
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
