//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own; two with the same attribute
/// values are interchangeable. Category attribute sets (ink colour, paper
/// size, ...) are value objects: the item that carries them is the entity.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct PaperData {
///     size: String,
///     weight_gsm: u32,
/// }
///
/// impl ValueObject for PaperData {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
