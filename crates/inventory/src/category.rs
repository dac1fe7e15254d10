use core::str::FromStr;
use serde::{Deserialize, Serialize};

use stationery_core::DomainError;

/// Concrete kind of a stocked item.
///
/// The label doubles as the type discriminator hashed into every identifier,
/// so renaming a label changes the identifiers of all items of that category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Pen,
    Pencil,
    Paper,
    Notebook,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Pen,
        Category::Pencil,
        Category::Paper,
        Category::Notebook,
    ];

    /// Stable, human-readable category name.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Pen => "Pen",
            Category::Pencil => "Pencil",
            Category::Paper => "Paper",
            Category::Notebook => "Notebook",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::validation(format!("unknown category: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_distinct() {
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in &Category::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("notebook".parse::<Category>().unwrap(), Category::Notebook);
        assert_eq!(" PEN ".parse::<Category>().unwrap(), Category::Pen);
    }

    #[test]
    fn parse_rejects_unknown_labels() {
        match "Stapler".parse::<Category>() {
            Err(DomainError::Validation(_)) => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for c in Category::ALL {
            assert_eq!(c.to_string().parse::<Category>().unwrap(), c);
        }
    }
}
