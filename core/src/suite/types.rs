//! suite/types.rs
//! `Suite` collaborator trait and the concrete `CipherSuite` key type.

use std::fmt;

use crate::crypto::StreamPrf;

/// External ciphersuite capability consumed by the planner.
pub trait Suite {
    /// Stable identifier; feeds the position seed.
    fn name(&self) -> &str;

    /// Fixed length of the suite's uniform point encoding.
    fn hide_len(&self) -> usize;

    /// PRF used to expand this suite's position stream.
    fn prf(&self) -> StreamPrf {
        StreamPrf::Sha256
    }
}

/// Owned suite descriptor, usable as a map key in `SuiteLevels`.
///
/// Ordering is by name, then encoding length, then PRF. The planner uses
/// it to break ties between suites of equal reach.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CipherSuite {
    name: String,
    hide_len: usize,
    prf: StreamPrf,
}

impl CipherSuite {
    pub fn new(name: impl Into<String>, hide_len: usize) -> Self {
        Self { name: name.into(), hide_len, prf: StreamPrf::Sha256 }
    }

    /// Owned descriptor of any `Suite` implementation.
    pub fn of(suite: &dyn Suite) -> Self {
        Self::new(suite.name(), suite.hide_len()).with_prf(suite.prf())
    }

    /// Same suite, position stream expanded with `prf`.
    pub fn with_prf(mut self, prf: StreamPrf) -> Self {
        self.prf = prf;
        self
    }
}

impl Suite for CipherSuite {
    fn name(&self) -> &str {
        &self.name
    }

    fn hide_len(&self) -> usize {
        self.hide_len
    }

    fn prf(&self) -> StreamPrf {
        self.prf
    }
}

impl fmt::Display for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SuiteError {
    /// Registry id with no known suite behind it.
    #[error("unknown ciphersuite id: 0x{raw:04x}")]
    UnknownSuite { raw: u16 },

    #[error("unknown position stream prf id: 0x{raw:04x}")]
    UnknownPrf { raw: u16 },
}
