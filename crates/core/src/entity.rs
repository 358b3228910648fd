//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity is the same object across time because of its identifier, not
/// its attribute values (an `InventoryRecord` keeps its identity as other
/// records come and go around it).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
