//! suite/mod.rs
//! Ciphersuite identity as seen by the layout engine.
//!
//! The engine never touches point arithmetic. All it needs from a suite is
//! a stable name, the byte length of its uniform ("hiding") point encoding,
//! and which PRF keys its position stream.

pub mod types;
pub mod registry;

pub use types::*;
pub use registry::*;
