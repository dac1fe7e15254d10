//! Stationery inventory domain module.
//!
//! This crate models stocked items (pens, pencils, paper, notebooks) as pure,
//! deterministic domain logic (no IO, no storage, no CLI). Owning collections
//! of items, persisting them and presenting them belongs to callers.

pub mod category;
pub mod identifier;
pub mod item;
pub mod kind;
pub mod record;

pub use category::Category;
pub use identifier::{attribute_hash, combine, derive_identifier};
pub use item::Item;
pub use kind::{ItemKind, NotebookData, PaperData, PenData, PencilData};
pub use record::{BasicInfo, FIELD_SEPARATOR};
