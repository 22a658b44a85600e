//! telemetry/mod.rs
//! Layout run counters, exposed as immutable snapshots.

pub mod stats;

pub use stats::*;
