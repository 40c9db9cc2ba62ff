//! # Cyrup HKDF
//!
//! HMAC-based extract-and-expand key derivation (RFC 5869) with a streaming
//! expander.
//!
//! ## Features
//!
//! - **Extract**: turn a shared secret and optional salt into a pseudorandom key
//! - **Expand**: pull output keying material block by block, up to 255 blocks
//! - **Derive**: extract and expand in one call, the recommended entry point
//! - **Config**: pick the hash by name for configuration-driven callers
//!
//! ## Quick Start
//!
//! ```rust
//! use cryypt_hkdf::{derive, extract, expand};
//! use sha2::Sha256;
//!
//! # fn main() -> cryypt_hkdf::Result<()> {
//! // One stream, several keys
//! let mut okm = derive::<Sha256>(b"shared secret", Some(b"salt"), Some(b"session v1"));
//! let enc_key = okm.read(32)?;
//! let mac_key = okm.read(32)?;
//! assert_ne!(*enc_key, *mac_key);
//!
//! // One PRK, several contexts
//! let prk = extract::<Sha256>(b"shared secret", None);
//! let client = expand::<Sha256>(prk.as_bytes(), Some(b"client")).read(16)?;
//! let server = expand::<Sha256>(prk.as_bytes(), Some(b"server")).read(16)?;
//! assert_ne!(*client, *server);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod derive;
pub mod error;
pub mod expand;
pub mod extract;
pub mod hash;

// Re-export core types
pub use error::{HkdfError, Result};
pub use hash::{max_output_size, output_size, HashFunction, MAX_BLOCKS};

// Re-export the main API
pub use config::{HashAlgorithm, HkdfConfig};
pub use derive::{derive, derive_key};
pub use expand::{expand, Expander};
pub use extract::{extract, Prk};

/// Expander over SHA-256
pub type HkdfSha256 = Expander<sha2::Sha256>;

/// Expander over SHA-384
pub type HkdfSha384 = Expander<sha2::Sha384>;

/// Expander over SHA-512
pub type HkdfSha512 = Expander<sha2::Sha512>;
