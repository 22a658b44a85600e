//! layout/derive.rs
//! Candidate position tables, one per ciphersuite.
//!
//! Level `i` of a suite's table holds `2^i` slots of `plen` bytes, laid out
//! right after level `i-1`. A tag drawn from the suite's position stream
//! picks one slot per level:
//!
//!   offset(L) = sum_{k<L} 2^k * plen + (tag_L mod 2^L) * plen
//!
//! A recipient tries at most `nlevels` positions. An outsider sees each
//! chosen position as one of `2^nlevels - 1` equally plausible slots.

use std::fmt;
use std::ops::Range;

use tracing::debug;

use crate::crypto::HashStream;
use crate::layout::types::LayoutError;
use crate::suite::{CipherSuite, Suite};

/// Per-suite planning state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteInfo {
    pub suite: CipherSuite,
    /// Uniform point encoding length.
    pub plen: usize,
    /// Per-level pseudorandom tags.
    pub tags: Vec<u32>,
    /// Per-level candidate offsets.
    pub positions: Vec<usize>,
    /// End of the highest level's slot: the suite's worst-case reach.
    pub max: usize,
    pub chosen_level: Option<usize>,
}

impl SuiteInfo {
    /// Build the candidate table for `suite` from its position stream.
    ///
    /// Fails with `OffsetOverflow` once a level would end past `usize::MAX`.
    pub fn derive(
        suite: &CipherSuite,
        nlevels: usize,
        stream: &mut HashStream,
    ) -> Result<Self, LayoutError> {
        let plen = suite.hide_len();
        // Tables deeper than the pointer width always overflow.
        let cap = nlevels.min(usize::BITS as usize + 1);
        let mut tags = Vec::with_capacity(cap);
        let mut positions = Vec::with_capacity(cap);

        let overflow = |level: usize| LayoutError::OffsetOverflow {
            suite: suite.to_string(),
            level,
        };

        let mut level_base = 0usize;
        for i in 0..nlevels {
            let tag = stream.next_tag();
            let level_len = u32::try_from(i)
                .ok()
                .and_then(|shift| 1usize.checked_shl(shift))
                .ok_or_else(|| overflow(i))?;
            let index = tag as usize & (level_len - 1);
            let pos = index
                .checked_mul(plen)
                .and_then(|off| level_base.checked_add(off))
                .filter(|pos| pos.checked_add(plen).is_some())
                .ok_or_else(|| overflow(i))?;

            debug!(
                suite = %suite,
                level = i,
                index,
                of = level_len,
                pos,
                tag = %hex::encode(tag.to_be_bytes()),
                "candidate position"
            );

            tags.push(tag);
            positions.push(pos);
            if i + 1 < nlevels {
                level_base = level_len
                    .checked_mul(plen)
                    .and_then(|span| level_base.checked_add(span))
                    .ok_or_else(|| overflow(i + 1))?;
            }
        }

        let max = positions.last().map_or(0, |&p| p + plen);

        Ok(Self {
            suite: suite.clone(),
            plen,
            tags,
            positions,
            max,
            chosen_level: None,
        })
    }

    #[inline]
    pub fn nlevels(&self) -> usize {
        self.positions.len()
    }

    /// Byte range of the level-`level` candidate.
    #[inline]
    pub fn slot(&self, level: usize) -> Range<usize> {
        let lo = self.positions[level];
        lo..lo + self.plen
    }

    /// Candidate ranges from level 0 upwards.
    pub fn slots(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.nlevels()).map(move |level| self.slot(level))
    }

    pub fn chosen_slot(&self) -> Option<Range<usize>> {
        self.chosen_level.map(|level| self.slot(level))
    }
}

impl fmt::Display for SuiteInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Suite {}", self.suite)
    }
}
