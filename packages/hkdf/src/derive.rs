//! Extract-then-expand composition

use crate::error::Result;
use crate::expand::Expander;
use crate::extract::extract;
use crate::hash::HashFunction;
use zeroize::Zeroizing;

/// Return an expander over the key extracted from `secret` and `salt`.
///
/// This is the recommended entry point. Salt and info may be absent.
#[must_use]
pub fn derive<D: HashFunction>(
    secret: &[u8],
    salt: Option<&[u8]>,
    info: Option<&[u8]>,
) -> Expander<D> {
    let prk = extract::<D>(secret, salt);
    Expander::new(prk.as_bytes(), info)
}

/// Derive exactly `len` bytes of key material in one call
///
/// # Errors
///
/// Returns [`HkdfError::EntropyLimitExceeded`](crate::HkdfError::EntropyLimitExceeded)
/// if `len` exceeds [`max_output_size`](crate::max_output_size) for `D`.
pub fn derive_key<D: HashFunction>(
    secret: &[u8],
    salt: Option<&[u8]>,
    info: Option<&[u8]>,
    len: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    derive::<D>(secret, salt, info).read(len)
}
