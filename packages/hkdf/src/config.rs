//! Configuration-driven key derivation
//!
//! Lets callers pick the hash by name (for example from a config file) rather
//! than by type parameter.

use crate::derive::derive_key;
use crate::error::{HkdfError, Result};
use crate::hash::{max_output_size, output_size};
use serde::{Deserialize, Serialize};
use sha2::{Sha256, Sha384, Sha512};
use std::fmt;
use std::str::FromStr;
use zeroize::Zeroizing;

/// Hash functions selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// SHA-256
    #[default]
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl HashAlgorithm {
    /// Digest length in bytes
    #[must_use]
    pub fn output_size(self) -> usize {
        match self {
            Self::Sha256 => output_size::<Sha256>(),
            Self::Sha384 => output_size::<Sha384>(),
            Self::Sha512 => output_size::<Sha512>(),
        }
    }

    /// Most bytes one derivation can produce with this hash
    #[must_use]
    pub fn max_output_size(self) -> usize {
        match self {
            Self::Sha256 => max_output_size::<Sha256>(),
            Self::Sha384 => max_output_size::<Sha384>(),
            Self::Sha512 => max_output_size::<Sha512>(),
        }
    }

    /// Canonical lowercase name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = HkdfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            _ => Err(HkdfError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Key derivation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HkdfConfig {
    /// Hash function backing HMAC
    #[serde(default)]
    pub algorithm: HashAlgorithm,
    /// Derived key length in bytes
    #[serde(default = "default_output_size")]
    pub output_size: usize,
}

fn default_output_size() -> usize {
    32
}

impl HkdfConfig {
    /// Create a configuration for `algorithm` producing `output_size` bytes
    #[must_use]
    pub fn new(algorithm: HashAlgorithm, output_size: usize) -> Self {
        Self {
            algorithm,
            output_size,
        }
    }

    /// 16-byte key over SHA-256
    #[must_use]
    pub fn aes128_key() -> Self {
        Self::new(HashAlgorithm::Sha256, 16)
    }

    /// 32-byte key over SHA-256
    #[must_use]
    pub fn aes256_key() -> Self {
        Self::new(HashAlgorithm::Sha256, 32)
    }

    /// 64-byte key over SHA-512
    #[must_use]
    pub fn sha512_wide() -> Self {
        Self::new(HashAlgorithm::Sha512, 64)
    }

    /// Check the output size fits within the algorithm's limit
    ///
    /// # Errors
    ///
    /// Returns [`HkdfError::EntropyLimitExceeded`] when `output_size` is above
    /// `255 × digest length`.
    pub fn validate(&self) -> Result<()> {
        let limit = self.algorithm.max_output_size();
        if self.output_size > limit {
            return Err(HkdfError::EntropyLimitExceeded {
                requested: self.output_size,
                remaining: limit,
            });
        }
        Ok(())
    }

    /// Derive `output_size` bytes from `secret` with optional `salt` and `info`
    ///
    /// # Errors
    ///
    /// Returns [`HkdfError::EntropyLimitExceeded`] when the configured output
    /// size cannot be produced by the selected hash.
    pub fn derive_key(
        &self,
        secret: &[u8],
        salt: Option<&[u8]>,
        info: Option<&[u8]>,
    ) -> Result<Zeroizing<Vec<u8>>> {
        self.validate()?;
        tracing::debug!(
            algorithm = %self.algorithm,
            output_size = self.output_size,
            "deriving key"
        );
        match self.algorithm {
            HashAlgorithm::Sha256 => derive_key::<Sha256>(secret, salt, info, self.output_size),
            HashAlgorithm::Sha384 => derive_key::<Sha384>(secret, salt, info, self.output_size),
            HashAlgorithm::Sha512 => derive_key::<Sha512>(secret, salt, info, self.output_size),
        }
    }
}

impl Default for HkdfConfig {
    fn default() -> Self {
        Self::aes256_key()
    }
}
