//! HKDF-Expand as a pull-based stream
//!
//! The expander generates `T(n) = HMAC(PRK, T(n-1) | info | n)` one block at a
//! time and hands out bytes on demand, so callers never commit to a total
//! output length up front. At most [`MAX_BLOCKS`] blocks can be produced.

use crate::error::{HkdfError, Result};
use crate::hash::{keyed_mac, output_size, HashFunction, KeyedMac, MAX_BLOCKS};
use hmac::Mac;
use std::fmt;
use std::io;
use zeroize::Zeroizing;

/// Streaming output-keying-material generator
///
/// Every read mutates the block counter and pending bytes, so one expander
/// serves one logical stream. Wrap it in a `Mutex` to share across threads.
pub struct Expander<D: HashFunction> {
    mac: KeyedMac<D>,
    size: usize,
    info: Vec<u8>,
    blocks: usize,
    block: Zeroizing<Vec<u8>>,
    consumed: usize,
}

impl<D: HashFunction> Expander<D> {
    /// Key an expander with `prk`, skipping the extract step.
    ///
    /// `prk` should come from [`extract`](crate::extract) or be a uniformly
    /// random key of at least the hash output size (RFC 5869 §3.3).
    #[must_use]
    pub fn new(prk: &[u8], info: Option<&[u8]>) -> Self {
        Self {
            mac: keyed_mac::<D>(prk),
            size: output_size::<D>(),
            info: info.map(<[u8]>::to_vec).unwrap_or_default(),
            blocks: 0,
            block: Zeroizing::new(Vec::new()),
            consumed: 0,
        }
    }

    /// Hash output size, which is also the block size of the stream
    #[must_use]
    pub fn output_size(&self) -> usize {
        self.size
    }

    /// Bytes this expander can still produce
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pending().len() + (MAX_BLOCKS - self.blocks) * self.size
    }

    /// Fill `out` completely with the next bytes of the stream.
    ///
    /// # Errors
    ///
    /// Returns [`HkdfError::EntropyLimitExceeded`] when `out` is longer than
    /// [`remaining`](Self::remaining). Nothing is written and the stream
    /// position does not move in that case.
    pub fn fill(&mut self, out: &mut [u8]) -> Result<()> {
        let need = out.len();
        let remaining = self.remaining();
        if need > remaining {
            tracing::debug!(
                requested = need,
                remaining,
                "HKDF read rejected: entropy limit reached"
            );
            return Err(HkdfError::EntropyLimitExceeded {
                requested: need,
                remaining,
            });
        }

        let mut written = self.drain_pending(out);
        while written < need {
            self.next_block()?;
            written += self.drain_pending(&mut out[written..]);
        }
        Ok(())
    }

    /// Read the next `len` bytes of the stream into a fresh buffer.
    ///
    /// # Errors
    ///
    /// Returns [`HkdfError::EntropyLimitExceeded`] when `len` exceeds
    /// [`remaining`](Self::remaining).
    pub fn read(&mut self, len: usize) -> Result<Zeroizing<Vec<u8>>> {
        let mut out = Zeroizing::new(vec![0u8; len]);
        self.fill(&mut out)?;
        Ok(out)
    }

    fn pending(&self) -> &[u8] {
        &self.block[self.consumed..]
    }

    /// Copy buffered bytes into `out`, returning how many were copied
    fn drain_pending(&mut self, out: &mut [u8]) -> usize {
        let pending = self.pending();
        let n = pending.len().min(out.len());
        out[..n].copy_from_slice(&pending[..n]);
        self.consumed += n;
        n
    }

    /// Replace the exhausted block with `T(n)`
    fn next_block(&mut self) -> Result<()> {
        let counter = u8::try_from(self.blocks + 1).map_err(|_| {
            HkdfError::EntropyLimitExceeded {
                requested: self.size,
                remaining: 0,
            }
        })?;
        tracing::trace!(counter, "generating HKDF output block");

        let mut mac = self.mac.clone();
        mac.update(&self.block);
        mac.update(&self.info);
        mac.update(&[counter]);
        self.block = Zeroizing::new(mac.finalize().into_bytes().to_vec());
        self.consumed = 0;
        self.blocks += 1;
        Ok(())
    }
}

impl<D: HashFunction> io::Read for Expander<D> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.fill(buf)?;
        Ok(buf.len())
    }
}

impl<D: HashFunction> fmt::Debug for Expander<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expander")
            .field("output_size", &self.size)
            .field("blocks", &self.blocks)
            .field("pending", &self.pending().len())
            .finish_non_exhaustive()
    }
}

/// Return an expander over `prk` and optional context `info`, skipping extraction.
///
/// Most callers want [`derive`](crate::derive) instead.
#[must_use]
pub fn expand<D: HashFunction>(prk: &[u8], info: Option<&[u8]>) -> Expander<D> {
    Expander::new(prk, info)
}
