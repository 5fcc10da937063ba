// Secure random byte sources

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// The byte source could not produce secure random bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("secure random source failed: {0}")]
pub struct RngFailure(pub String);

/// Secure random byte source
///
/// Implementations fill the whole buffer or fail. A failure must never be
/// papered over with bytes from a weaker generator.
pub trait SecureRandom {
    /// Fill `buf` with random bytes
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), RngFailure>;
}

impl<S: SecureRandom + ?Sized> SecureRandom for &mut S {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), RngFailure> {
        (**self).fill(buf)
    }
}

/// OS-based secure random number generator
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSecureRandom {
    rng: OsRng,
}

impl OsSecureRandom {
    pub fn new() -> Self {
        OsSecureRandom { rng: OsRng }
    }
}

impl SecureRandom for OsSecureRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), RngFailure> {
        self.rng
            .try_fill_bytes(buf)
            .map_err(|e| RngFailure(e.to_string()))
    }
}

/// Deterministic RNG for testing
///
/// Expands a seed with SHA-256 over `seed || counter`, so two instances with
/// the same seed produce the same stream.
#[derive(Debug, Clone)]
pub struct DeterministicRng {
    seed: Vec<u8>,
    counter: u64,
}

impl DeterministicRng {
    pub fn new(seed: &[u8]) -> Self {
        DeterministicRng { seed: seed.to_vec(), counter: 0 }
    }
}

impl SecureRandom for DeterministicRng {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), RngFailure> {
        for chunk in buf.chunks_mut(32) {
            let mut hasher = Sha256::new();
            hasher.update(&self.seed);
            hasher.update(self.counter.to_le_bytes());
            self.counter += 1;

            let block = hasher.finalize();
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
        Ok(())
    }
}

/// Replays a fixed byte sequence, then zeros.
///
/// Every `fill` starts over from the beginning of the sequence.
#[derive(Debug, Clone)]
pub struct FixedBytes {
    bytes: Vec<u8>,
}

impl FixedBytes {
    pub fn new(bytes: &[u8]) -> Self {
        FixedBytes { bytes: bytes.to_vec() }
    }
}

impl SecureRandom for FixedBytes {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), RngFailure> {
        let n = self.bytes.len().min(buf.len());
        buf[..n].copy_from_slice(&self.bytes[..n]);
        buf[n..].fill(0);
        Ok(())
    }
}
