//! layout/planner.rs
//! Greedy two-pass placement of every suite's point in the header.
//!
//! Suites are processed in ascending order of worst-case reach, so the most
//! constrained ones get first claim on low offsets. Two layouts are kept:
//! - `exclude` receives every candidate of every suite processed so far;
//! - `committed` receives only each suite's chosen position.
//!
//! A suite's chosen position must avoid every position, used or not, of the
//! suites processed before it. Its own unused alternatives may still be
//! overlapped by suites processed after it.

use tracing::{debug, trace};

use crate::constants::MAX_SUITES;
use crate::crypto::{HashStream, SeedSource};
use crate::headers::{Entry, MaxLenPolicy, WriterConfig};
use crate::layout::alloc::IntervalLayout;
use crate::layout::derive::SuiteInfo;
use crate::layout::types::{LayoutError, SuiteLevels};
use crate::suite::{CipherSuite, Suite};
use crate::telemetry::LayoutStats;

/// Outcome of one successful planning run.
#[derive(Debug, Clone)]
pub struct Plan {
    pub header_len: usize,
    /// Suites in processing order, each with its chosen level set.
    pub suites: Vec<SuiteInfo>,
    /// One binding reservation per suite.
    pub committed: IntervalLayout,
    pub stats: LayoutStats,
}

/// Reject empty level budgets and empty point encodings.
pub(crate) fn validate_suite(suite: &CipherSuite, nlevels: usize) -> Result<(), LayoutError> {
    if nlevels == 0 {
        return Err(LayoutError::InvalidLevels { suite: suite.to_string() });
    }
    if suite.hide_len() == 0 {
        return Err(LayoutError::InvalidPointLen { suite: suite.to_string() });
    }
    Ok(())
}

fn validate_entries(
    suite_levels: &SuiteLevels,
    entry_len: usize,
    entries: &[Entry],
) -> Result<(), LayoutError> {
    for (index, entry) in entries.iter().enumerate() {
        if !suite_levels.contains_key(&entry.suite) {
            return Err(LayoutError::UnknownEntrySuite {
                index,
                suite: entry.suite.to_string(),
            });
        }
        if entry.data.len() > entry_len {
            return Err(LayoutError::EntryTooLong {
                index,
                len: entry.data.len(),
                max: entry_len,
            });
        }
    }
    Ok(())
}

/// Seed `suite`'s position stream and derive its candidate table.
pub(crate) fn derive_suite(
    suite: &CipherSuite,
    nlevels: usize,
    seeds: &dyn SeedSource,
) -> Result<SuiteInfo, LayoutError> {
    let seed = seeds
        .seed(suite)
        .ok_or_else(|| LayoutError::MissingSeed { suite: suite.to_string() })?;
    let mut stream = HashStream::new(suite.prf(), &seed);
    SuiteInfo::derive(suite, nlevels, &mut stream)
}

/// Lay out one point position per suite.
///
/// `entry_len` and `entries` are validated but do not influence placement.
pub fn plan(
    suite_levels: &SuiteLevels,
    entry_len: usize,
    entries: &[Entry],
    config: &WriterConfig,
    seeds: &dyn SeedSource,
) -> Result<Plan, LayoutError> {
    let nsuites = suite_levels.len();
    if nsuites > MAX_SUITES {
        return Err(LayoutError::TooManySuites { count: nsuites, max: MAX_SUITES });
    }

    // Map iteration order is arbitrary; walk suites by name so validation
    // errors are reproducible.
    let mut requested: Vec<(&CipherSuite, usize)> =
        suite_levels.iter().map(|(suite, &nlevels)| (suite, nlevels)).collect();
    requested.sort_by(|a, b| a.0.cmp(b.0));

    for &(suite, nlevels) in &requested {
        validate_suite(suite, nlevels)?;
    }
    validate_entries(suite_levels, entry_len, entries)?;

    let mut stats = LayoutStats { suites: nsuites, ..Default::default() };

    let mut infos = Vec::with_capacity(nsuites);
    let mut reach = 0usize;
    for (suite, nlevels) in requested {
        let si = derive_suite(suite, nlevels, seeds)?;
        reach = reach.max(si.max);
        infos.push(si);
    }
    if let Some(max) = config.max_len {
        if max < reach {
            reach = max;
            stats.clamped = true;
        }
    }
    stats.reach = reach;

    // Smallest reach first; equal reach falls back to suite ordering.
    infos.sort_by(|a, b| a.max.cmp(&b.max).then_with(|| a.suite.cmp(&b.suite)));

    let mut exclude = IntervalLayout::new();
    let mut committed = IntervalLayout::new();

    let mut header_len = 0usize;
    for (idx, si) in infos.iter_mut().enumerate() {
        // idx < MAX_SUITES, so it fits the one-byte owner field.
        let owner = idx as u8;
        let nlevels = si.nlevels();

        // Reserve every candidate in exclude, top level first. The chosen
        // level only moves down while the run of free levels from the top
        // is unbroken.
        let mut chosen = nlevels;
        for level in (0..nlevels).rev() {
            let slot = si.slot(level);
            let free = exclude.reserve(slot.start, slot.end, false, owner);
            stats.add_candidate(free);
            trace!(suite = %si.suite, level, lo = slot.start, hi = slot.end, free, "exclude reserve");
            if free && level + 1 == chosen {
                chosen = level;
            }
        }
        if chosen == nlevels {
            return Err(LayoutError::NoViablePosition { suite: si.suite.to_string() });
        }
        si.chosen_level = Some(chosen);

        let slot = si.slot(chosen);
        if !committed.reserve(slot.start, slot.end, true, owner) {
            panic!(
                "committed layout conflict at [{}-{}) for suite {}: exclude layout accepted it",
                slot.start, slot.end, si.suite
            );
        }
        stats.add_committed(slot.len());
        header_len = header_len.max(slot.end);
        debug!(suite = %si.suite, level = chosen, lo = slot.start, hi = slot.end, "picked position");
    }

    stats.header_len = header_len;
    debug!(header_len, "layout complete");
    committed.dump();

    if config.max_len_policy == MaxLenPolicy::Enforce {
        if let Some(max) = config.max_len {
            if header_len > max {
                return Err(LayoutError::HeaderTooLong { len: header_len, max });
            }
        }
    }

    Ok(Plan { header_len, suites: infos, committed, stats })
}
