//! Capability surface consumed by permission-gated views.
//!
//! This crate deliberately contains no authorization *logic*: no roles, no
//! tokens, no policy resolution. The embedding application decides who holds
//! which permission; the view layers here only ask a boolean question and
//! act on the answer.

pub mod capabilities;
pub mod permissions;

pub use capabilities::{Capabilities, StaticCapabilities};
pub use permissions::Permission;
