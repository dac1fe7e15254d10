//! Identifier derivation.
//!
//! `identifier = (H(discriminator) ^ H(attr_1) ^ ... ^ H(attr_n)) mod IDENTIFIER_MODULUS`
//! where `H` is the first eight bytes (little-endian) of the blake3 digest of
//! the value's UTF-8 text. blake3 keeps the result stable across processes,
//! platforms and compiler releases.
//!
//! Attributes arrive tagged with their field name (`ink_color=Blue`), so each
//! sub-hash lives in its own field domain. At the raw [`combine`] level XOR is
//! still order-insensitive and cancels equal inputs; tagging keeps distinct
//! attributes from ever producing equal inputs.
//!
//! Only `IDENTIFIER_DIGITS` decimal digits survive the reduction, so distinct
//! items still collide occasionally. Items that need a collision-free key must
//! get one elsewhere.

use stationery_core::ItemIdentifier;

use crate::kind::ItemKind;

/// Hash one value for identifier derivation.
pub fn attribute_hash(value: &str) -> u64 {
    let digest = blake3::hash(value.as_bytes());
    let mut low = [0u8; 8];
    low.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(low)
}

/// XOR the discriminator hash with every attribute hash and truncate.
pub fn combine<'a>(
    discriminator: &str,
    attributes: impl IntoIterator<Item = &'a str>,
) -> ItemIdentifier {
    let combined = attributes
        .into_iter()
        .fold(attribute_hash(discriminator), |acc, attr| acc ^ attribute_hash(attr));
    ItemIdentifier::from_hash(combined)
}

/// Derive the identifier of a category variant from its label and identifying attributes.
pub fn derive_identifier(kind: &ItemKind) -> ItemIdentifier {
    let attributes = kind.identifying_attributes();
    let identifier = combine(kind.category().label(), attributes.iter().map(String::as_str));
    tracing::debug!(
        category = kind.category().label(),
        identifier = %identifier,
        "derived item identifier"
    );
    identifier
}
