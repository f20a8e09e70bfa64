//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities are the same entity when their identifiers match, no matter
/// what the rest of their state looks like. Collections compare entities via
/// [`Entity::same_identity`] rather than `PartialEq` on the whole struct.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison by key only.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
