//! headers/mod.rs
//! Negotiation header writer and recipient-side lookup.
//!
//! Notes:
//! - The header carries no in-band structure. Each suite's point sits at
//!   its committed offset, and everything else is indistinguishable from
//!   random bytes.
//! - Writing the final bytes is the caller's job. The writer only fixes
//!   where each point goes and how long the header is.

pub mod types;
pub mod writer;
pub mod reader;

pub use types::*;
pub use writer::*;
pub use reader::*;
