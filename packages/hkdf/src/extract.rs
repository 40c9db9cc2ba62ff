//! HKDF-Extract
//!
//! Compresses input keying material and an optional salt into a pseudorandom
//! key whose length equals the hash output size.

use crate::hash::{keyed_mac, output_size, HashFunction};
use hmac::Mac;
use std::borrow::Cow;
use std::fmt;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Pseudorandom key produced by [`extract`]
///
/// The bytes are wiped on drop and compared in constant time.
#[derive(Clone)]
pub struct Prk(Zeroizing<Vec<u8>>);

impl Prk {
    /// Key bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Key length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the key is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Prk {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Zeroizing::new(bytes))
    }
}

impl AsRef<[u8]> for Prk {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for Prk {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_slice().ct_eq(other.0.as_slice()).into()
    }
}

impl Eq for Prk {}

impl fmt::Debug for Prk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prk")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}

/// Zero-filled salt of the hash output size when none is given (RFC 5869 §2.2)
fn salt_or_default<'a, D: HashFunction>(salt: Option<&'a [u8]>) -> Cow<'a, [u8]> {
    match salt {
        Some(salt) => Cow::Borrowed(salt),
        None => Cow::Owned(vec![0u8; output_size::<D>()]),
    }
}

/// Derive a pseudorandom key from `secret` and an optional independent `salt`.
///
/// Only call this directly when one key feeds several [`expand`](crate::expand)
/// calls with different context info; otherwise use [`derive`](crate::derive).
#[must_use]
pub fn extract<D: HashFunction>(secret: &[u8], salt: Option<&[u8]>) -> Prk {
    let salt = salt_or_default::<D>(salt);
    let mut extractor = keyed_mac::<D>(&salt);
    extractor.update(secret);
    Prk(Zeroizing::new(extractor.finalize().into_bytes().to_vec()))
}
