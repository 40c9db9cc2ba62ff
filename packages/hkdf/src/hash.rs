//! Hash and HMAC capabilities consumed by the extract and expand stages
//!
//! The hash function is chosen by type parameter. Any RustCrypto digest that
//! exposes its block size can key an HMAC, so SHA-2, SHA-3 and BLAKE2 all work.

use digest::core_api::BlockSizeUser;
use digest::Digest;
use hmac::digest::KeyInit;
use hmac::SimpleHmac;

/// A hash function usable as the HKDF primitive
pub trait HashFunction: Digest + BlockSizeUser + Clone {}

impl<D: Digest + BlockSizeUser + Clone> HashFunction for D {}

/// HMAC instance keyed for hash `D`
pub(crate) type KeyedMac<D> = SimpleHmac<D>;

/// Maximum number of output blocks one expander may generate
pub const MAX_BLOCKS: usize = 255;

/// Native output size of `D` in bytes
#[must_use]
#[inline]
pub fn output_size<D: HashFunction>() -> usize {
    <D as Digest>::output_size()
}

/// Most bytes a single expander over `D` can ever produce
#[must_use]
#[inline]
pub fn max_output_size<D: HashFunction>() -> usize {
    MAX_BLOCKS * output_size::<D>()
}

/// Key a fresh HMAC instance
pub(crate) fn keyed_mac<D: HashFunction>(key: &[u8]) -> KeyedMac<D> {
    match <KeyedMac<D> as KeyInit>::new_from_slice(key) {
        Ok(mac) => mac,
        // keys longer than a block are hashed, shorter ones zero-padded
        Err(_) => unreachable!("HMAC accepts keys of any length"),
    }
}
