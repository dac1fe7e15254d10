//! Entity trait: identity + continuity across state changes.

/// Something whose identity survives mutation of its other fields.
///
/// For stocked items the identity is the derived identifier, so an item keeps
/// the same identity while stock, price, name or description change, and takes
/// a new one when its identifying attributes change.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
