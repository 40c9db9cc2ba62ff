//! Error handling for key derivation

use thiserror::Error;

/// HKDF-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HkdfError {
    /// A read asked for more output than the expander can still produce
    #[error("HKDF entropy limit exceeded: requested {requested} bytes, {remaining} remaining")]
    EntropyLimitExceeded {
        /// Bytes requested by the failed read
        requested: usize,
        /// Bytes the expander could still produce
        remaining: usize,
    },

    /// Hash algorithm name not recognised
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

impl HkdfError {
    /// Whether this error is the expander's output ceiling
    #[must_use]
    pub fn is_entropy_limit(&self) -> bool {
        matches!(self, Self::EntropyLimitExceeded { .. })
    }
}

impl From<HkdfError> for std::io::Error {
    fn from(err: HkdfError) -> Self {
        std::io::Error::other(err)
    }
}

/// Result type for key derivation operations
pub type Result<T> = std::result::Result<T, HkdfError>;
