//! headers/types.rs
//! Caller-facing inputs and configuration of the negotiation header writer.

use serde::{Deserialize, Serialize};

use crate::suite::CipherSuite;

/// One entrypoint to hide in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Ciphersuite the owner's public key is drawn from.
    pub suite: CipherSuite,
    /// Owner's public key.
    pub pub_key: Vec<u8>,
    /// Entrypoint data decryptable by the owner.
    pub data: Vec<u8>,
}

impl Entry {
    pub fn new(suite: CipherSuite, pub_key: impl Into<Vec<u8>>, data: impl Into<Vec<u8>>) -> Self {
        Self { suite, pub_key: pub_key.into(), data: data.into() }
    }
}

/// How a caller-set maximum header length is treated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxLenPolicy {
    /// Clamp the reported reach only; never fail because of it.
    #[default]
    Advisory,
    /// Fail with `HeaderTooLong` when the planned header is longer.
    Enforce,
}

/// Writer configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Maximum header length; `None` means unbounded.
    pub max_len: Option<usize>,
    pub max_len_policy: MaxLenPolicy,
}

impl WriterConfig {
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
