//! layout/mod.rs
//! Layout planning: candidate derivation, interval reservation and the
//! greedy planner that ties them together.

pub mod types;
pub mod alloc;
pub mod derive;
pub mod planner;

pub use types::*;
pub use alloc::*;
pub use derive::*;
pub use planner::{plan, Plan};
