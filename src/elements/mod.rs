//! Periodic-table registry used to resolve PDB element symbols.
//!
//! The registry is immutable once built. [`ElementTable::default_table`]
//! hands out a process-wide instance built from the compiled-in records;
//! custom tables are derived from it with [`ElementTable::with_overrides`]
//! (see [`datafile`] for the text format).

pub mod datafile;
mod table;

use std::path::Path;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ImportError;
use table::{ElementRecord, ELEMENTS_DEFAULT};

/// Short symbol of the vacancy entry.
pub const VACANCY_SYMBOL: &str = "Vac";
/// Short symbol of the entry used for unknown atoms.
pub const DEFAULT_SYMBOL: &str = "Default";
/// Short symbol of the entry used for uniformly colored sticks.
pub const STICK_SYMBOL: &str = "Stick";

/// Which of the three tabulated radii an atom is drawn with.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RadiusType {
    /// Pre-defined display radius.
    #[default]
    Used,
    /// Covalent radius.
    Covalent,
    /// Atomic (van der Waals style) radius.
    Atomic,
}

impl RadiusType {
    /// Map the numeric selector (0, 1, 2) onto a radius type.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Used),
            1 => Some(Self::Covalent),
            2 => Some(Self::Atomic),
            _ => None,
        }
    }

    /// Index into [`ElementProp::radii`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Used => 0,
            Self::Covalent => 1,
            Self::Atomic => 2,
        }
    }
}

/// One element of the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementProp {
    /// Atomic number.
    pub number: u32,
    /// Full element name, e.g. `Carbon`.
    pub name: String,
    /// Element symbol, e.g. `C`.
    pub short_name: String,
    /// RGBA display color.
    pub color: [f32; 4],
    /// `[used, covalent, atomic]` radii in angstroms.
    pub radii: [f32; 3],
    /// `(charge_state, ionic_radius)` pairs.
    pub ionic_radii: Vec<(i32, f32)>,
}

impl ElementProp {
    /// Radius of the requested type.
    #[must_use]
    pub fn radius(&self, radius_type: RadiusType) -> f32 {
        self.radii[radius_type.index()]
    }

    /// Ionic radius for a charge state, if tabulated.
    #[must_use]
    pub fn ionic_radius(&self, charge: i32) -> Option<f32> {
        self.ionic_radii
            .iter()
            .find(|(c, _)| *c == charge)
            .map(|(_, r)| *r)
    }
}

impl From<&ElementRecord> for ElementProp {
    fn from(r: &ElementRecord) -> Self {
        Self {
            number: r.number,
            name: r.name.to_owned(),
            short_name: r.short_name.to_owned(),
            color: r.color,
            radii: r.radii,
            ionic_radii: r.ionic_radii.to_vec(),
        }
    }
}

/// Immutable element registry with case-insensitive symbol lookup.
#[derive(Debug, Clone)]
pub struct ElementTable {
    elements: Vec<ElementProp>,
    by_symbol: FxHashMap<String, usize>,
}

impl ElementTable {
    /// Process-wide table built from the compiled-in records.
    #[must_use]
    pub fn default_table() -> &'static ElementTable {
        static TABLE: OnceLock<ElementTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            Self::from_elements(
                ELEMENTS_DEFAULT.iter().map(ElementProp::from).collect(),
            )
        })
    }

    /// Build a table from an explicit element list. Later entries with an
    /// already-seen symbol shadow nothing; the first occurrence wins.
    #[must_use]
    pub fn from_elements(elements: Vec<ElementProp>) -> Self {
        let mut by_symbol = FxHashMap::default();
        for (i, element) in elements.iter().enumerate() {
            let _ = by_symbol
                .entry(element.short_name.to_uppercase())
                .or_insert(i);
        }
        Self {
            elements,
            by_symbol,
        }
    }

    /// Derive a new table where each override replaces the entry with the
    /// same symbol. Overrides for unknown symbols are inserted ahead of the
    /// trailing vacancy/default/stick entries.
    #[must_use]
    pub fn with_overrides(&self, overrides: Vec<ElementProp>) -> Self {
        let mut elements = self.elements.clone();
        for element in overrides {
            let key = element.short_name.to_uppercase();
            if let Some(existing) = elements
                .iter_mut()
                .find(|e| e.short_name.to_uppercase() == key)
            {
                log::debug!("element data overrides {}", existing.short_name);
                *existing = element;
            } else {
                let at = elements
                    .iter()
                    .position(|e| is_special(&e.short_name))
                    .unwrap_or(elements.len());
                elements.insert(at, element);
            }
        }
        Self::from_elements(elements)
    }

    /// Load a custom element data file on top of the default table.
    pub fn load_custom(path: &Path) -> Result<Self, ImportError> {
        let content = std::fs::read_to_string(path)?;
        let overrides = datafile::parse(&content)?;
        log::info!(
            "loaded {} custom element entries from {}",
            overrides.len(),
            path.display()
        );
        Ok(Self::default_table().with_overrides(overrides))
    }

    /// Case-insensitive lookup by element symbol.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&ElementProp> {
        self.by_symbol
            .get(&symbol.to_uppercase())
            .map(|&i| &self.elements[i])
    }

    /// Whether a symbol is present in the table.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.by_symbol.contains_key(&symbol.to_uppercase())
    }

    /// Entry used for vacancies (`X` symbols).
    #[must_use]
    pub fn vacancy(&self) -> &ElementProp {
        self.special(VACANCY_SYMBOL, 3)
    }

    /// Entry used for symbols that match nothing.
    #[must_use]
    pub fn fallback(&self) -> &ElementProp {
        self.special(DEFAULT_SYMBOL, 2)
    }

    /// Entry used for uniformly colored sticks.
    #[must_use]
    pub fn stick(&self) -> &ElementProp {
        self.special(STICK_SYMBOL, 1)
    }

    /// All entries in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, ElementProp> {
        self.elements.iter()
    }

    /// Number of entries, special entries included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn special(&self, symbol: &str, from_end: usize) -> &ElementProp {
        self.get(symbol).unwrap_or_else(|| {
            let builtin = Self::default_table();
            &builtin.elements[builtin.elements.len() - from_end]
        })
    }
}

impl<'a> IntoIterator for &'a ElementTable {
    type Item = &'a ElementProp;
    type IntoIter = std::slice::Iter<'a, ElementProp>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Default for ElementTable {
    fn default() -> Self {
        Self::default_table().clone()
    }
}

fn is_special(short_name: &str) -> bool {
    [VACANCY_SYMBOL, DEFAULT_SYMBOL, STICK_SYMBOL]
        .iter()
        .any(|s| s.eq_ignore_ascii_case(short_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let table = ElementTable::default_table();
        assert_eq!(table.get("fe").unwrap().name, "Iron");
        assert_eq!(table.get("FE").unwrap().name, "Iron");
        assert_eq!(table.get("Fe").unwrap().number, 26);
        assert!(table.get("Qq").is_none());
    }

    #[test]
    fn radius_matches_selected_type() {
        let table = ElementTable::default_table();
        let hydrogen = table.get("H").unwrap();
        assert_eq!(hydrogen.radius(RadiusType::Used), 0.32);
        assert_eq!(hydrogen.radius(RadiusType::Covalent), 0.32);
        assert_eq!(hydrogen.radius(RadiusType::Atomic), 0.79);
        for element in table {
            for idx in 0..3 {
                let rt = RadiusType::from_index(idx).unwrap();
                assert_eq!(element.radius(rt), element.radii[idx]);
            }
        }
        assert!(RadiusType::from_index(3).is_none());
    }

    #[test]
    fn special_entries_are_last() {
        let table = ElementTable::default_table();
        assert_eq!(table.vacancy().name, "Vacancy");
        assert_eq!(table.fallback().name, "Default");
        assert_eq!(table.stick().name, "Stick");
        let names: Vec<&str> =
            table.iter().rev().take(3).map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Stick", "Default", "Vacancy"]);
        assert_eq!(table.iter().len(), table.len());
    }

    #[test]
    fn ionic_radius_lookup() {
        let oxygen = ElementTable::default_table().get("O").unwrap();
        assert_eq!(oxygen.ionic_radius(-2), Some(1.32));
        assert_eq!(oxygen.ionic_radius(3), None);
    }

    #[test]
    fn overrides_replace_and_insert() {
        let base = ElementTable::default_table();
        let mut carbon = base.get("C").unwrap().clone();
        carbon.radii = [2.0, 2.0, 2.0];
        let custom = ElementProp {
            number: 200,
            name: "Unobtainium".to_owned(),
            short_name: "Uo".to_owned(),
            color: [0.1, 0.2, 0.3, 1.0],
            radii: [1.5, 1.5, 1.5],
            ionic_radii: Vec::new(),
        };

        let table = base.with_overrides(vec![carbon, custom]);
        assert_eq!(table.len(), base.len() + 1);
        assert_eq!(table.get("c").unwrap().radii, [2.0, 2.0, 2.0]);
        assert_eq!(table.get("UO").unwrap().name, "Unobtainium");
        assert_eq!(table.stick().name, "Stick");
        // The shared default table is untouched.
        assert_eq!(base.get("C").unwrap().radii[0], 0.77);
    }

    #[test]
    fn specials_fall_back_to_builtin() {
        let hydrogen = ElementTable::default_table().get("H").unwrap();
        let table = ElementTable::from_elements(vec![hydrogen.clone()]);
        assert_eq!(table.fallback().name, "Default");
        assert_eq!(table.vacancy().name, "Vacancy");
    }
}
