//! suite/registry.rs
//! Registry of ciphersuites with standardized hiding encodings.
//!
//! Notes:
//! - Edwards/Montgomery curves use Elligator-style encodings, one field
//!   element wide.
//! - NIST curves use Elligator Squared, two field elements wide.

use num_enum::TryFromPrimitive;

use crate::constants::suite_ids;
use crate::crypto::StreamPrf;
use crate::suite::types::{CipherSuite, Suite, SuiteError};

#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum KnownSuite {
    Ed25519  = suite_ids::ED25519,
    Curve448 = suite_ids::CURVE448,
    P256     = suite_ids::P256,
    P384     = suite_ids::P384,
    P521     = suite_ids::P521,
}

impl KnownSuite {
    pub const ALL: [KnownSuite; 5] = [
        KnownSuite::Ed25519,
        KnownSuite::Curve448,
        KnownSuite::P256,
        KnownSuite::P384,
        KnownSuite::P521,
    ];

    pub fn verify(raw: u16) -> Result<Self, SuiteError> {
        KnownSuite::try_from_primitive(raw).map_err(|_| SuiteError::UnknownSuite { raw })
    }

    /// Owned descriptor for use as a `SuiteLevels` key.
    pub fn suite(self) -> CipherSuite {
        CipherSuite::new(self.name(), self.hide_len()).with_prf(self.prf())
    }
}

impl Suite for KnownSuite {
    fn name(&self) -> &str {
        match self {
            KnownSuite::Ed25519  => "Ed25519",
            KnownSuite::Curve448 => "Curve448",
            KnownSuite::P256     => "P256",
            KnownSuite::P384     => "P384",
            KnownSuite::P521     => "P521",
        }
    }

    fn hide_len(&self) -> usize {
        match self {
            KnownSuite::Ed25519  => 32,
            KnownSuite::Curve448 => 56,
            KnownSuite::P256     => 64,
            KnownSuite::P384     => 96,
            KnownSuite::P521     => 132,
        }
    }

    fn prf(&self) -> StreamPrf {
        match self {
            KnownSuite::Curve448 => StreamPrf::Blake3,
            _ => StreamPrf::Sha256,
        }
    }
}
