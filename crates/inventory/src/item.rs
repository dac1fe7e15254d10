use serde::{Deserialize, Serialize};

use stationery_core::{Entity, ItemIdentifier};

use crate::category::Category;
use crate::identifier::derive_identifier;
use crate::kind::ItemKind;
use crate::record::BasicInfo;

/// A stocked good.
///
/// Stock, price, name and description are free-form and unvalidated (negative
/// stock or price is accepted). The category and identifier follow the
/// [`ItemKind`]: they are recomputed whenever the kind changes and cannot be
/// set from outside.
///
/// Equality and hashing use the identifier only. Because identifiers are a
/// lossy 4-digit hash, two unrelated items may compare equal; callers that
/// deduplicate by identifier rely on exactly this behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ItemRecord")]
pub struct Item {
    identifier: ItemIdentifier,
    category: Category,
    stock: i64,
    price: f64,
    name: String,
    description: String,
    kind: ItemKind,
}

/// Deserialization input: identifier and category are always re-derived.
#[derive(Deserialize)]
struct ItemRecord {
    stock: i64,
    price: f64,
    name: String,
    description: String,
    kind: ItemKind,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(
            record.stock,
            record.price,
            record.name,
            record.description,
            record.kind,
        )
    }
}

impl Item {
    pub fn new(
        stock: i64,
        price: f64,
        name: impl Into<String>,
        description: impl Into<String>,
        kind: impl Into<ItemKind>,
    ) -> Self {
        let kind = kind.into();
        Self {
            identifier: derive_identifier(&kind),
            category: kind.category(),
            stock,
            price,
            name: name.into(),
            description: description.into(),
            kind,
        }
    }

    pub fn identifier(&self) -> ItemIdentifier {
        self.identifier
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn set_stock(&mut self, stock: i64) {
        tracing::trace!(identifier = %self.identifier, stock, "stock updated");
        self.stock = stock;
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        tracing::trace!(identifier = %self.identifier, price, "price updated");
        self.price = price;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replace the category variant, re-deriving category and identifier.
    pub fn set_kind(&mut self, kind: impl Into<ItemKind>) {
        self.kind = kind.into();
        self.refresh_identity();
    }

    /// Edit identifying attributes in place, re-deriving category and identifier.
    pub fn update_kind(&mut self, edit: impl FnOnce(&mut ItemKind)) {
        edit(&mut self.kind);
        self.refresh_identity();
    }

    /// Common fields as a structured record.
    pub fn basic_info_record(&self) -> BasicInfo {
        BasicInfo {
            identifier: self.identifier,
            name: self.name.clone(),
            price: self.price,
            stock: self.stock,
            description: self.description.clone(),
        }
    }

    /// `<identifier>, <name>, <price>, <stock>, <description>`
    pub fn basic_info(&self) -> String {
        self.basic_info_record().to_string()
    }

    pub fn details(&self) -> String {
        self.kind.details()
    }

    fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    fn refresh_identity(&mut self) {
        self.set_category(self.kind.category());
        let previous = self.identifier;
        self.identifier = derive_identifier(&self.kind);
        if previous != self.identifier {
            tracing::debug!(
                category = self.category.label(),
                %previous,
                identifier = %self.identifier,
                "item identity refreshed"
            );
        }
    }
}

impl Entity for Item {
    type Id = ItemIdentifier;

    fn id(&self) -> &Self::Id {
        &self.identifier
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for Item {}

impl core::hash::Hash for Item {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.basic_info(), self.details())
    }
}
