//! layout/alloc.rs
//! Interval reservations over a one-dimensional byte-offset space.
//!
//! One type serves both planning passes. The exclude pass records soft
//! markers for every candidate it has seen. The committed pass records one
//! binding claim per suite. Both kinds occupy space for overlap checks. The
//! allocator itself enforces membership only, never priority.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

/// One claimed half-open range `[lo, hi)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reservation {
    pub lo: usize,
    pub hi: usize,
    /// Suite index in processing order.
    pub owner: u8,
    pub binding: bool,
}

impl Reservation {
    #[inline]
    pub fn len(&self) -> usize {
        self.hi - self.lo
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hi <= self.lo
    }

    #[inline]
    pub fn overlaps(&self, lo: usize, hi: usize) -> bool {
        lo < self.hi && self.lo < hi
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}-{}) owner={} {}",
            self.lo,
            self.hi,
            self.owner,
            if self.binding { "binding" } else { "soft" }
        )
    }
}

/// Disjoint reservations keyed by their low offset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IntervalLayout {
    slots: BTreeMap<usize, Reservation>,
}

impl IntervalLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every reservation.
    pub fn reset(&mut self) {
        self.slots.clear();
    }

    /// Existing reservation overlapping `[lo, hi)`, if any.
    pub fn conflict(&self, lo: usize, hi: usize) -> Option<&Reservation> {
        // Reservations are disjoint, so only the last one starting below
        // `hi` can reach into the range.
        self.slots
            .range(..hi)
            .next_back()
            .map(|(_, r)| r)
            .filter(|r| r.overlaps(lo, hi))
    }

    /// Claim `[lo, hi)` for `owner`.
    ///
    /// Returns `false` and leaves the layout untouched if the range overlaps
    /// any existing reservation, soft or binding. Empty ranges are refused.
    pub fn reserve(&mut self, lo: usize, hi: usize, binding: bool, owner: u8) -> bool {
        if lo >= hi || self.conflict(lo, hi).is_some() {
            return false;
        }
        self.slots.insert(lo, Reservation { lo, hi, owner, binding });
        true
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Reservations in ascending offset order.
    pub fn iter(&self) -> impl Iterator<Item = &Reservation> + '_ {
        self.slots.values()
    }

    /// Highest reserved offset (exclusive), or 0 when empty.
    pub fn end(&self) -> usize {
        self.slots.values().next_back().map_or(0, |r| r.hi)
    }

    /// Diagnostic listing at debug level.
    pub fn dump(&self) {
        for r in self.iter() {
            debug!(lo = r.lo, hi = r.hi, owner = r.owner, binding = r.binding, "reservation");
        }
    }
}

impl fmt::Display for IntervalLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in self.iter() {
            writeln!(f, "{}", r)?;
        }
        Ok(())
    }
}
