//! The generation bridge: an abstract "fill 16 bytes" capability.
//!
//! The core does not generate randomness itself and places no constraint on
//! the distribution or algorithm behind a source. It hands a source a
//! 16-byte buffer, and either all 16 bytes come back filled or the source's
//! own failure is returned to the caller unchanged.

use crate::Guid;
use rand::RngCore;

/// Supplies the 16 fresh bytes backing a newly generated [`Guid`].
///
/// Implement this for any conforming entropy source — an OS generator, a
/// seeded PRNG in tests, or hardware. Whether `fill` blocks is entirely the
/// source's concern.
pub trait ByteSource {
    /// Failure reported by the underlying source.
    type Error;

    /// Fills `buf` with 16 fresh bytes.
    ///
    /// # Errors
    ///
    /// Returns the source's own error when no bytes could be produced. On
    /// failure the buffer contents are unspecified and must not be used.
    fn fill(&mut self, buf: &mut [u8; 16]) -> Result<(), Self::Error>;
}

/// [`ByteSource`] backed by the operating system's random number generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl ByteSource for OsEntropy {
    type Error = rand::Error;

    fn fill(&mut self, buf: &mut [u8; 16]) -> Result<(), rand::Error> {
        rand::rngs::OsRng.try_fill_bytes(buf)
    }
}

impl Guid {
    /// Produces a new identifier from 16 bytes drawn from `source`.
    ///
    /// # Errors
    ///
    /// Passes the source's failure through as-is; no identifier is produced
    /// in that case.
    pub fn generate<S: ByteSource>(source: &mut S) -> Result<Guid, S::Error> {
        let mut bytes = [0u8; 16];
        source.fill(&mut bytes)?;
        Ok(Guid::from_bytes(bytes))
    }

    /// Produces a new identifier from the thread-local generator.
    ///
    /// Convenience for callers that do not supply their own [`ByteSource`].
    pub fn random() -> Guid {
        let mut bytes = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut bytes);
        Guid::from_bytes(bytes)
    }
}
