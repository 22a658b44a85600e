//! crypto/mod.rs
//! Keyed pseudorandom streams and the seeds that key them.

pub mod stream;
pub mod seed;

pub use stream::*;
pub use seed::*;
