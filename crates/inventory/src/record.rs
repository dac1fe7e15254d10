//! Text record format shared with external inventory tools.
//!
//! `<identifier>, <name>, <price>, <stock>, <description>` followed directly by
//! the category details. Field order and the comma-space separator are a
//! compatibility contract.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use stationery_core::{DomainError, DomainResult, ItemIdentifier};

pub const FIELD_SEPARATOR: &str = ", ";

/// Common fields of an item, as they appear in the text record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub identifier: ItemIdentifier,
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub description: String,
}

impl BasicInfo {
    /// Parse the basic-info prefix of a text record.
    ///
    /// Only the first four separators are significant: anything after the
    /// stock field, including a details suffix, lands in `description`. A name
    /// that itself contains `", "` cannot be recovered from the format.
    pub fn parse(record: &str) -> DomainResult<Self> {
        let mut fields = record.splitn(5, FIELD_SEPARATOR);
        let mut next = |field: &str| {
            fields
                .next()
                .ok_or_else(|| DomainError::validation(format!("record is missing {field}")))
        };

        let identifier = next("identifier")?.parse::<ItemIdentifier>()?;
        let name = next("name")?.to_string();
        let price = next("price")?;
        let price = price
            .parse::<f64>()
            .map_err(|e| DomainError::validation(format!("price {price:?}: {e}")))?;
        let stock = next("stock")?;
        let stock = stock
            .parse::<i64>()
            .map_err(|e| DomainError::validation(format!("stock {stock:?}: {e}")))?;
        let description = next("description")?.to_string();

        Ok(Self {
            identifier,
            name,
            price,
            stock,
            description,
        })
    }
}

impl core::fmt::Display for BasicInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sep = FIELD_SEPARATOR;
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.identifier, self.name, self.price, self.stock, self.description
        )
    }
}

impl FromStr for BasicInfo {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
