//! Sales domain module.
//!
//! This crate contains the completed-order records the reporting engine
//! aggregates, implemented purely as deterministic domain data (no IO, no
//! HTTP, no storage).

pub mod order;

pub use order::{Order, OrderLine};
