//! Products domain module.
//!
//! This crate contains the catalog records consumed by the reporting engine,
//! implemented purely as deterministic domain data (no IO, no HTTP, no
//! storage). Products are owned and mutated by the catalog screens; the
//! reporting side only ever reads them.

pub mod product;

pub use product::{Product, UNCATEGORIZED};
