//! crypto/stream.rs
//! Deterministic byte streams keyed by an arbitrary seed.
//!
//! Design:
//! - SHA-256 in counter mode: block_n = SHA-256(seed || n as u64 BE).
//! - BLAKE3 in XOF mode: hash(seed) read as an unbounded output stream.
//!
//! Both produce arbitrarily long output on demand and are pure functions of
//! the seed, so two streams built from the same seed agree byte for byte.

use byteorder::{BigEndian, ByteOrder};
use num_enum::TryFromPrimitive;
use sha2::{Digest as _, Sha256};

use crate::constants::{prf_ids, TAG_LEN};
use crate::suite::SuiteError;

/// PRF backing a position stream.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, TryFromPrimitive)]
pub enum StreamPrf {
    Sha256 = prf_ids::SHA256,
    Blake3 = prf_ids::BLAKE3,
}

impl StreamPrf {
    pub fn verify(raw: u16) -> Result<Self, SuiteError> {
        StreamPrf::try_from_primitive(raw).map_err(|_| SuiteError::UnknownPrf { raw })
    }
}

const SHA256_BLOCK: usize = 32;

/// Internal stream state, one variant per PRF.
pub enum HashStream {
    Sha256 {
        seed: Vec<u8>,
        counter: u64,
        block: [u8; SHA256_BLOCK],
        used: usize,
    },
    Blake3(blake3::OutputReader),
}

impl HashStream {
    pub fn new(prf: StreamPrf, seed: &[u8]) -> Self {
        match prf {
            StreamPrf::Sha256 => HashStream::Sha256 {
                seed: seed.to_vec(),
                counter: 0,
                block: [0u8; SHA256_BLOCK],
                // Forces the first read to compute block 0.
                used: SHA256_BLOCK,
            },
            StreamPrf::Blake3 => {
                let mut hasher = blake3::Hasher::new();
                hasher.update(seed);
                HashStream::Blake3(hasher.finalize_xof())
            }
        }
    }

    /// Fill `out` with the next `out.len()` stream bytes.
    pub fn fill(&mut self, out: &mut [u8]) {
        match self {
            HashStream::Sha256 { seed, counter, block, used } => {
                let mut off = 0usize;
                while off < out.len() {
                    if *used == SHA256_BLOCK {
                        let mut h = Sha256::new();
                        h.update(&seed[..]);
                        h.update(counter.to_be_bytes());
                        *block = h.finalize().into();
                        *counter += 1;
                        *used = 0;
                    }
                    let n = (SHA256_BLOCK - *used).min(out.len() - off);
                    out[off..off + n].copy_from_slice(&block[*used..*used + n]);
                    *used += n;
                    off += n;
                }
            }
            HashStream::Blake3(reader) => reader.fill(out),
        }
    }

    /// Next level tag: four stream bytes, big-endian.
    #[inline]
    pub fn next_tag(&mut self) -> u32 {
        let mut buf = [0u8; TAG_LEN];
        self.fill(&mut buf);
        BigEndian::read_u32(&buf)
    }
}
