//! headers/writer.rs
//!
//! Negotiation header writer.
//!
//! A negotiation header conceals a variable number of entrypoints inside a
//! variable-length blob of random-looking bytes. Each entrypoint can be
//! found and used only by the owner of one public key. Keys may come from
//! different ciphersuites, in any combination, with no coordination
//! between the suites.
//!
//! Each entrypoint carries a short fixed-length encrypted blob. Its owner
//! decrypts it to obtain keys and pointers to the real content, which
//! usually follows the header under a symmetric key that many or all
//! entrypoints may share.

use std::fmt;

use rand::RngCore;

use crate::crypto::{SeedSource, StaticSeed};
use crate::headers::types::{Entry, MaxLenPolicy, WriterConfig};
use crate::layout::{plan, IntervalLayout, LayoutError, SuiteInfo, SuiteLevels};
use crate::suite::CipherSuite;
use crate::telemetry::LayoutStats;

pub struct Writer {
    config: WriterConfig,
    seeds: Box<dyn SeedSource + Send + Sync>,
    layout: IntervalLayout,
    suites: Vec<SuiteInfo>,
    header_len: usize,
    stats: Option<LayoutStats>,
}

impl Default for Writer {
    fn default() -> Self {
        Self::with_config(WriterConfig::default())
    }
}

impl fmt::Debug for Writer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Writer")
            .field("config", &self.config)
            .field("header_len", &self.header_len)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writer with explicit configuration and the static seed source.
    pub fn with_config(config: WriterConfig) -> Self {
        Self {
            config,
            seeds: Box::new(StaticSeed),
            layout: IntervalLayout::new(),
            suites: Vec::new(),
            header_len: 0,
            stats: None,
        }
    }

    /// Replace the source of per-suite position seeds.
    pub fn with_seed_source(mut self, seeds: impl SeedSource + Send + Sync + 'static) -> Self {
        self.seeds = Box::new(seeds);
        self
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Set the optional maximum header length for subsequent `layout` calls.
    /// Zero clears it.
    pub fn set_max_len(&mut self, max: usize) {
        self.config.max_len = (max != 0).then_some(max);
    }

    pub fn set_max_len_policy(&mut self, policy: MaxLenPolicy) {
        self.config.max_len_policy = policy;
    }

    /// Lay out the entrypoints of one or more negotiation headers.
    ///
    /// `suite_levels` maps every ciphersuite in use to its level budget, the
    /// maximum level at which its point may be encoded. The budget must be
    /// standardized per suite. It should be log2 of the number of suites
    /// expected to exist when the suite is defined.
    ///
    /// Every entrypoint carries an `entry_len`-byte payload whose content
    /// need not be known yet. Returns the total header length for this
    /// layout. The cached result is cleared first, so a failed call leaves
    /// no layout behind.
    ///
    /// `rng` is reserved for fresh ephemeral keys and is not consumed by
    /// position derivation.
    pub fn layout<R: RngCore + ?Sized>(
        &mut self,
        suite_levels: &SuiteLevels,
        entry_len: usize,
        entries: &[Entry],
        _rng: &mut R,
    ) -> Result<usize, LayoutError> {
        self.layout.reset();
        self.suites.clear();
        self.header_len = 0;
        self.stats = None;

        let plan = plan(suite_levels, entry_len, entries, &self.config, self.seeds.as_ref())?;

        self.header_len = plan.header_len;
        self.layout = plan.committed;
        self.suites = plan.suites;
        self.stats = Some(plan.stats);
        Ok(self.header_len)
    }

    /// Header length of the last successful layout, 0 if none.
    pub fn header_len(&self) -> usize {
        self.header_len
    }

    /// Committed point positions of the last successful layout.
    pub fn committed(&self) -> &IntervalLayout {
        &self.layout
    }

    /// Suite tables of the last successful layout, in processing order.
    pub fn suites(&self) -> &[SuiteInfo] {
        &self.suites
    }

    pub fn chosen_level(&self, suite: &CipherSuite) -> Option<usize> {
        self.suites
            .iter()
            .find(|si| &si.suite == suite)
            .and_then(|si| si.chosen_level)
    }

    pub fn stats(&self) -> Option<&LayoutStats> {
        self.stats.as_ref()
    }
}
