//! nego-core
//!
//! Cryptographic negotiation headers: one opaque blob hiding a variable
//! number of entrypoints for key owners on different, uncoordinated
//! ciphersuites. This crate plans where each suite's point goes.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;

pub mod suite;
pub mod crypto;
pub mod telemetry;

// Planning
pub mod layout;
pub mod headers;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::crypto::{EphemeralSeed, SeedSource, StaticSeed, StreamPrf};
    pub use crate::headers::{candidate_positions, Entry, MaxLenPolicy, Writer, WriterConfig};
    pub use crate::layout::{LayoutError, SuiteLevels};
    pub use crate::suite::{CipherSuite, KnownSuite, Suite};
}
