//! layout/types.rs
//! Planner input aliases and the layout error type.

use std::collections::HashMap;

use crate::suite::CipherSuite;

/// Level budget per ciphersuite. Budgets are standardized per suite and
/// should be about log2 of the number of suites expected to coexist.
pub type SuiteLevels = HashMap<CipherSuite, usize>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Owner bookkeeping holds at most `max` suites.
    #[error("too many ciphersuites: {count} > {max}")]
    TooManySuites { count: usize, max: usize },

    /// Top-down scan found no usable level for `suite`.
    #[error("no viable position for suite {suite}")]
    NoViablePosition { suite: String },

    #[error("suite {suite}: level budget must be at least 1")]
    InvalidLevels { suite: String },

    #[error("suite {suite}: point encoding length must be at least 1")]
    InvalidPointLen { suite: String },

    /// Level `level` of the candidate table would end past `usize::MAX`.
    #[error("suite {suite}: level {level} offset overflows")]
    OffsetOverflow { suite: String, level: usize },

    #[error("entry {index}: suite {suite} is not part of the layout")]
    UnknownEntrySuite { index: usize, suite: String },

    #[error("entry {index}: payload of {len} bytes exceeds entry length {max}")]
    EntryTooLong { index: usize, len: usize, max: usize },

    #[error("no position seed available for suite {suite}")]
    MissingSeed { suite: String },

    /// Only raised under `MaxLenPolicy::Enforce`.
    #[error("header length {len} exceeds maximum {max}")]
    HeaderTooLong { len: usize, max: usize },
}
