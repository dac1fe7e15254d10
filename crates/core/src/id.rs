//! Item identifiers.
//!
//! An identifier is derived, never user-supplied: category variants hash their
//! identifying attributes and reduce the result to a fixed number of decimal
//! digits. The reduction is lossy, so two distinct items can share an
//! identifier. Callers that need uniqueness must track it themselves.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Number of decimal digits an identifier keeps.
///
/// Changing this alters the text record format consumed by external tools.
pub const IDENTIFIER_DIGITS: usize = 4;

/// Identifier space size: `10^IDENTIFIER_DIGITS`.
pub const IDENTIFIER_MODULUS: u32 = 10u32.pow(IDENTIFIER_DIGITS as u32);

/// Identifier of a stocked item, always in `0..IDENTIFIER_MODULUS`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ItemIdentifier(u32);

impl ItemIdentifier {
    /// Build an identifier from an already-reduced value.
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value >= IDENTIFIER_MODULUS {
            return Err(DomainError::invalid_id(format!(
                "ItemIdentifier: {value} exceeds {IDENTIFIER_DIGITS} digits"
            )));
        }
        Ok(Self(value))
    }

    /// Truncate an arbitrary hash to its least significant decimal digits.
    pub fn from_hash(hash: u64) -> Self {
        // Remainder is < IDENTIFIER_MODULUS, so it always fits in u32.
        Self((hash % u64::from(IDENTIFIER_MODULUS)) as u32)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ItemIdentifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:0width$}", self.0, width = IDENTIFIER_DIGITS)
    }
}

impl TryFrom<u32> for ItemIdentifier {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemIdentifier> for u32 {
    fn from(value: ItemIdentifier) -> Self {
        value.0
    }
}

impl FromStr for ItemIdentifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::invalid_id(format!(
                "ItemIdentifier: {s:?} is not a decimal number"
            )));
        }
        let value = trimmed
            .parse::<u32>()
            .map_err(|e| DomainError::invalid_id(format!("ItemIdentifier: {e}")))?;
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulus_matches_digit_count() {
        assert_eq!(IDENTIFIER_MODULUS, 10_000);
    }

    #[test]
    fn from_hash_keeps_low_decimal_digits() {
        assert_eq!(ItemIdentifier::from_hash(1_234_567).value(), 4567);
        assert_eq!(ItemIdentifier::from_hash(u64::MAX).value(), 1615);
        assert_eq!(ItemIdentifier::from_hash(0).value(), 0);
    }

    #[test]
    fn new_rejects_values_outside_the_identifier_space() {
        assert!(ItemIdentifier::new(9999).is_ok());
        match ItemIdentifier::new(10_000) {
            Err(DomainError::InvalidId(_)) => {}
            other => panic!("Expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(ItemIdentifier::new(42).unwrap().to_string(), "0042");
        assert_eq!(ItemIdentifier::new(9999).unwrap().to_string(), "9999");
    }

    #[test]
    fn parse_accepts_padded_text() {
        let id: ItemIdentifier = "0042".parse().unwrap();
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<ItemIdentifier>().is_err());
        assert!("-1".parse::<ItemIdentifier>().is_err());
        assert!("12a".parse::<ItemIdentifier>().is_err());
        assert!("12345".parse::<ItemIdentifier>().is_err());
    }

    #[test]
    fn serde_rejects_out_of_range_numbers() {
        let id: ItemIdentifier = serde_json::from_str("17").unwrap();
        assert_eq!(id.value(), 17);
        assert_eq!(serde_json::to_string(&id).unwrap(), "17");
        assert!(serde_json::from_str::<ItemIdentifier>("10000").is_err());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn from_hash_always_lands_in_range(hash in any::<u64>()) {
                let id = ItemIdentifier::from_hash(hash);
                prop_assert!(id.value() < IDENTIFIER_MODULUS);
                prop_assert_eq!(id.to_string().len(), IDENTIFIER_DIGITS);
            }

            #[test]
            fn display_parses_back(value in 0u32..IDENTIFIER_MODULUS) {
                let id = ItemIdentifier::new(value).unwrap();
                prop_assert_eq!(id.to_string().parse::<ItemIdentifier>().unwrap(), id);
            }
        }
    }
}
