//! Category variants and their identifying attributes.
//!
//! Every variant lists the attributes that feed its identifier and renders its
//! own details text. Details always start with [`FIELD_SEPARATOR`] so they can
//! be appended directly to an item's basic info.
//!
//! | variant  | identifying attributes       |
//! |----------|------------------------------|
//! | Pen      | `ink_color`, `point_size_um` |
//! | Pencil   | `hardness`, `has_eraser`     |
//! | Paper    | `size`, `weight_gsm`         |
//! | Notebook | `pages`, `ruling`            |

use serde::{Deserialize, Serialize};

use stationery_core::ValueObject;

use crate::category::Category;
use crate::record::FIELD_SEPARATOR;

/// Pen attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenData {
    pub ink_color: String,
    /// Ball/tip width in micrometres (500 = 0.5mm).
    pub point_size_um: u32,
}

/// Pencil attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PencilData {
    /// Graphite grade, e.g. "HB", "2B".
    pub hardness: String,
    pub has_eraser: bool,
}

/// Loose paper attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperData {
    /// Sheet format, e.g. "A4", "Letter".
    pub size: String,
    pub weight_gsm: u32,
}

/// Notebook attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookData {
    pub pages: u32,
    /// Page ruling, e.g. "lined", "grid", "blank".
    pub ruling: String,
}

impl ValueObject for PenData {}
impl ValueObject for PencilData {}
impl ValueObject for PaperData {}
impl ValueObject for NotebookData {}

impl PenData {
    pub fn new(ink_color: impl Into<String>, point_size_um: u32) -> Self {
        Self {
            ink_color: ink_color.into(),
            point_size_um,
        }
    }
}

impl PencilData {
    pub fn new(hardness: impl Into<String>, has_eraser: bool) -> Self {
        Self {
            hardness: hardness.into(),
            has_eraser,
        }
    }
}

impl PaperData {
    pub fn new(size: impl Into<String>, weight_gsm: u32) -> Self {
        Self {
            size: size.into(),
            weight_gsm,
        }
    }
}

impl NotebookData {
    pub fn new(pages: u32, ruling: impl Into<String>) -> Self {
        Self {
            pages,
            ruling: ruling.into(),
        }
    }
}

/// Closed set of item categories, each carrying its own attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum ItemKind {
    Pen(PenData),
    Pencil(PencilData),
    Paper(PaperData),
    Notebook(NotebookData),
}

impl ItemKind {
    pub fn category(&self) -> Category {
        match self {
            ItemKind::Pen(_) => Category::Pen,
            ItemKind::Pencil(_) => Category::Pencil,
            ItemKind::Paper(_) => Category::Paper,
            ItemKind::Notebook(_) => Category::Notebook,
        }
    }

    /// Every attribute hashed into the identifier, as `field=value` text.
    ///
    /// The field name keeps values of different attributes apart, so swapping
    /// two values or giving both the same text still changes the hash input.
    pub fn identifying_attributes(&self) -> Vec<String> {
        match self {
            ItemKind::Pen(p) => vec![
                tagged("ink_color", &p.ink_color),
                tagged("point_size_um", p.point_size_um),
            ],
            ItemKind::Pencil(p) => vec![
                tagged("hardness", &p.hardness),
                tagged("has_eraser", p.has_eraser),
            ],
            ItemKind::Paper(p) => vec![tagged("size", &p.size), tagged("weight_gsm", p.weight_gsm)],
            ItemKind::Notebook(n) => vec![tagged("pages", n.pages), tagged("ruling", &n.ruling)],
        }
    }

    /// Category-specific part of the text record.
    pub fn details(&self) -> String {
        let sep = FIELD_SEPARATOR;
        match self {
            ItemKind::Pen(p) => format!("{sep}{}{sep}{}um", p.ink_color, p.point_size_um),
            ItemKind::Pencil(p) => {
                let eraser = if p.has_eraser { "eraser" } else { "no eraser" };
                format!("{sep}{}{sep}{eraser}", p.hardness)
            }
            ItemKind::Paper(p) => format!("{sep}{}{sep}{}gsm", p.size, p.weight_gsm),
            ItemKind::Notebook(n) => format!("{sep}{} pages{sep}{}", n.pages, n.ruling),
        }
    }
}

fn tagged(field: &str, value: impl core::fmt::Display) -> String {
    format!("{field}={value}")
}

impl From<PenData> for ItemKind {
    fn from(value: PenData) -> Self {
        ItemKind::Pen(value)
    }
}

impl From<PencilData> for ItemKind {
    fn from(value: PencilData) -> Self {
        ItemKind::Pencil(value)
    }
}

impl From<PaperData> for ItemKind {
    fn from(value: PaperData) -> Self {
        ItemKind::Paper(value)
    }
}

impl From<NotebookData> for ItemKind {
    fn from(value: NotebookData) -> Self {
        ItemKind::Notebook(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_follows_variant() {
        assert_eq!(ItemKind::from(PenData::new("Blue", 500)).category(), Category::Pen);
        assert_eq!(ItemKind::from(PencilData::new("HB", true)).category(), Category::Pencil);
        assert_eq!(ItemKind::from(PaperData::new("A4", 80)).category(), Category::Paper);
        assert_eq!(ItemKind::from(NotebookData::new(96, "lined")).category(), Category::Notebook);
    }

    #[test]
    fn details_per_variant() {
        assert_eq!(ItemKind::from(PenData::new("Blue", 500)).details(), ", Blue, 500um");
        assert_eq!(ItemKind::from(PencilData::new("2B", false)).details(), ", 2B, no eraser");
        assert_eq!(ItemKind::from(PencilData::new("HB", true)).details(), ", HB, eraser");
        assert_eq!(ItemKind::from(PaperData::new("A4", 80)).details(), ", A4, 80gsm");
        assert_eq!(ItemKind::from(NotebookData::new(96, "grid")).details(), ", 96 pages, grid");
    }

    #[test]
    fn identifying_attributes_are_tagged_with_field_names() {
        assert_eq!(
            ItemKind::from(PenData::new("Red", 700)).identifying_attributes(),
            vec!["ink_color=Red".to_string(), "point_size_um=700".to_string()]
        );
        assert_eq!(
            ItemKind::from(PencilData::new("HB", false)).identifying_attributes(),
            vec!["hardness=HB".to_string(), "has_eraser=false".to_string()]
        );
        assert_eq!(
            ItemKind::from(NotebookData::new(96, "96")).identifying_attributes(),
            vec!["pages=96".to_string(), "ruling=96".to_string()]
        );
    }

    #[test]
    fn serde_tags_variant_with_category_label() {
        let kind = ItemKind::from(PaperData::new("A5", 100));
        let json = serde_json::to_value(&kind).unwrap();
        assert_eq!(json["category"], "Paper");
        assert_eq!(json["size"], "A5");
        let back: ItemKind = serde_json::from_value(json).unwrap();
        assert_eq!(back, kind);
    }
}
