//! Value object trait: equality by value, not identity.

/// Marker trait for immutable domain values compared by their attributes.
///
/// A date range or a category rollup has no identity of its own; two with
/// equal fields are interchangeable. Implementors stay immutable: to
/// "modify" one, construct a new value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
