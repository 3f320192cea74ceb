//! Inventory domain module.
//!
//! This crate contains the stock-movement records the reporting engine
//! buckets into inbound/outbound flow, implemented purely as deterministic
//! domain data (no IO, no HTTP, no storage).

pub mod movement;

pub use movement::{MovementKind, StockMovement};
