//! crypto/seed.rs
//! Seed sources for per-suite position streams.
//!
//! `StaticSeed` keys each stream from the suite name alone. Layouts are then
//! fully reproducible across runs, which is what tests want and what
//! production must avoid. `EphemeralSeed` keys each stream from the suite's
//! fresh ephemeral public point encoding via HKDF-SHA256.

use std::collections::HashMap;

use hkdf::Hkdf;
use sha2::Sha256;

use crate::constants::{EPHEMERAL_SEED_INFO, SEED_LEN_32, SEED_PREFIX};
use crate::suite::{CipherSuite, Suite};

/// Produces the seed for one suite's position stream.
///
/// Returns `None` when no seed material is available for `suite`.
pub trait SeedSource {
    fn seed(&self, suite: &dyn Suite) -> Option<Vec<u8>>;
}

/// Static, name-derived seed: `"NegoCipherSuite:<name>"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticSeed;

impl SeedSource for StaticSeed {
    fn seed(&self, suite: &dyn Suite) -> Option<Vec<u8>> {
        Some(format!("{}{}", SEED_PREFIX, suite.name()).into_bytes())
    }
}

/// Seeds derived from each suite's ephemeral Diffie-Hellman representation.
///
/// Material is keyed by the full suite descriptor, so suites sharing a name
/// but not an encoding length or PRF never share a seed.
#[derive(Debug, Default, Clone)]
pub struct EphemeralSeed {
    reps: HashMap<CipherSuite, Vec<u8>>,
}

impl EphemeralSeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the uniform encoding of `suite`'s ephemeral public point.
    pub fn insert(&mut self, suite: &dyn Suite, dhrep: impl Into<Vec<u8>>) {
        self.reps.insert(CipherSuite::of(suite), dhrep.into());
    }
}

impl SeedSource for EphemeralSeed {
    fn seed(&self, suite: &dyn Suite) -> Option<Vec<u8>> {
        let dhrep = self.reps.get(&CipherSuite::of(suite))?;
        let salt = format!("{}{}", SEED_PREFIX, suite.name());
        let hk = Hkdf::<Sha256>::new(Some(salt.as_bytes()), dhrep);
        let mut out = vec![0u8; SEED_LEN_32];
        hk.expand(EPHEMERAL_SEED_INFO, &mut out).ok()?;
        Some(out)
    }
}
