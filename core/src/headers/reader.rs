//! headers/reader.rs
//! Recipient side: where to look for a suite's point.
//!
//! The owner of an entrypoint does not know which level the writer picked.
//! Deriving the same candidate table gives at most `nlevels` ranges, one
//! per level, and the committed point sits in exactly one of them.

use std::ops::Range;

use crate::crypto::SeedSource;
use crate::layout::planner::{derive_suite, validate_suite};
use crate::layout::LayoutError;
use crate::suite::CipherSuite;

/// Candidate byte ranges for `suite`, level 0 first.
pub fn candidate_positions(
    suite: &CipherSuite,
    nlevels: usize,
    seeds: &dyn SeedSource,
) -> Result<Vec<Range<usize>>, LayoutError> {
    validate_suite(suite, nlevels)?;
    let si = derive_suite(suite, nlevels, seeds)?;
    Ok(si.slots().collect())
}
