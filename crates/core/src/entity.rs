//! Entity trait: identity that persists across attribute changes.

/// Minimal interface for domain records with identity.
///
/// Two entities with the same `Id` denote the same thing even when their
/// attributes differ (a product keeps its identity through a price edit).
pub trait Entity {
    /// Strongly-typed identifier.
    type Id: Copy + Eq + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
