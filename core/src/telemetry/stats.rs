//! telemetry/stats.rs
//! Counters collected during one layout run.
//!
//! Summary: the planner fills a `LayoutStats` as it scans candidates and
//! commits positions, then hands it out as an immutable snapshot with the
//! finished plan.

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Suites placed.
    pub suites: usize,
    /// Soft reservations attempted in the exclude pass.
    pub candidates: u64,
    /// Soft reservations refused because of an overlap.
    pub soft_conflicts: u64,
    /// Binding reservations held by the committed layout.
    pub committed: usize,
    /// Bytes covered by committed reservations.
    pub committed_bytes: usize,
    /// Largest worst-case suite reach, after the max-length clamp.
    pub reach: usize,
    /// Whether the caller's maximum length clamped `reach`.
    pub clamped: bool,
    pub header_len: usize,
}

impl LayoutStats {
    /// Record one exclude-pass attempt.
    pub fn add_candidate(&mut self, free: bool) {
        self.candidates += 1;
        if !free {
            self.soft_conflicts += 1;
        }
    }

    /// Record one committed position of `len` bytes.
    pub fn add_committed(&mut self, len: usize) {
        self.committed += 1;
        self.committed_bytes += len;
    }

    /// Fraction of header bytes holding a committed point.
    pub fn density(&self) -> f64 {
        if self.header_len == 0 {
            return 0.0;
        }
        self.committed_bytes as f64 / self.header_len as f64
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
