//! Equipment catalog
//!
//! The fixed list of suggested equipment names shown by the interactive
//! shell. The list is built once at startup and never changes afterwards;
//! operators can still type a name that is not in it.

use serde::Serialize;

/// Equipment inspected when no catalog is given on the command line
pub const DEFAULT_EQUIPMENT: [&str; 8] = [
    "Pump A",
    "Pump B",
    "Compressor",
    "Boiler",
    "Cooling Tower",
    "Electrical Panel",
    "Piping System",
    "Ventilation Fan",
];

/// Label of the menu entry that switches to free-text input
pub const OTHER_LABEL: &str = "Other (enter manually)";

/// Immutable, ordered list of suggested equipment names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquipmentCatalog {
    items: Vec<String>,
}

/// What the operator picked from the equipment menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection<'a> {
    /// A catalog entry
    Listed(&'a str),
    /// The trailing "other" entry
    Other,
}

impl EquipmentCatalog {
    /// Build a catalog from the given names.
    ///
    /// Names are trimmed; blank names and repeats are dropped, keeping the
    /// first occurrence. An empty result falls back to [`DEFAULT_EQUIPMENT`].
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut items: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if !name.is_empty() && !items.iter().any(|i| i == name) {
                items.push(name.to_string());
            }
        }
        if items.is_empty() {
            return Self::default();
        }
        Self { items }
    }

    /// Catalog entries in display order
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of catalog entries (excluding the "other" entry)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Menu labels: every entry followed by the "other" entry
    #[must_use]
    pub fn menu_labels(&self) -> Vec<&str> {
        self.items
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(OTHER_LABEL))
            .collect()
    }

    /// Resolve a zero-based menu index
    #[must_use]
    pub fn select(&self, index: usize) -> Option<MenuSelection<'_>> {
        match index {
            i if i < self.items.len() => Some(MenuSelection::Listed(&self.items[i])),
            i if i == self.items.len() => Some(MenuSelection::Other),
            _ => None,
        }
    }
}

impl Default for EquipmentCatalog {
    fn default() -> Self {
        Self {
            items: DEFAULT_EQUIPMENT.iter().map(ToString::to_string).collect(),
        }
    }
}
