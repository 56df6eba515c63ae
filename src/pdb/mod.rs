//! PDB reading: atoms from `ATOM`/`HETATM`/`TER`, bonds from `CONECT`.
//!
//! PDB is a fixed-column format. Everything here slices columns rather than
//! splitting on whitespace, because real-world files pack fields together.

mod atoms;
mod sticks;

use std::path::Path;

pub use atoms::{read_atoms, AtomList, AtomProp, TER_NAME, VACANCY_SHORT_NAME};
pub use sticks::{read_sticks, StickList, StickProp};

use crate::elements::{ElementTable, RadiusType};
use crate::error::ImportError;

/// Record name of a PDB line: the first six columns, right-trimmed.
pub(crate) fn record_name(line: &str) -> &str {
    line.get(..6).unwrap_or(line).trim_end()
}

/// Atoms and sticks of one PDB file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdbStructure {
    /// Atoms in file order, `TER` placeholders included.
    pub atoms: Vec<AtomProp>,
    /// Unique bonds.
    pub sticks: Vec<StickProp>,
    /// Number of real atoms (placeholders excluded).
    pub atom_count: usize,
    /// Number of repeated `CONECT` pairs that were skipped.
    pub duplicate_sticks: usize,
}

impl PdbStructure {
    /// Parse PDB text. Bonds are read only when `read_bonds` is set.
    pub fn parse(
        text: &str,
        table: &ElementTable,
        radius_type: RadiusType,
        read_bonds: bool,
        infer_orders: bool,
    ) -> Result<Self, ImportError> {
        let AtomList { atoms, count } =
            read_atoms(text.as_bytes(), table, radius_type)?;
        let StickList { sticks, duplicates } = if read_bonds {
            read_sticks(text.as_bytes(), &atoms, infer_orders)?
        } else {
            StickList::default()
        };
        Ok(Self {
            atoms,
            sticks,
            atom_count: count,
            duplicate_sticks: duplicates,
        })
    }

    /// Read and parse a PDB file.
    pub fn from_path(
        path: &Path,
        table: &ElementTable,
        radius_type: RadiusType,
        read_bonds: bool,
        infer_orders: bool,
    ) -> Result<Self, ImportError> {
        let text = std::fs::read_to_string(path)?;
        log::info!("parsing {}", path.display());
        Self::parse(&text, table, radius_type, read_bonds, infer_orders)
    }

    /// Atom by 1-based serial.
    #[must_use]
    pub fn atom(&self, serial: usize) -> Option<&AtomProp> {
        serial.checked_sub(1).and_then(|i| self.atoms.get(i))
    }

    /// Real atoms, placeholders skipped.
    pub fn real_atoms(&self) -> impl Iterator<Item = &AtomProp> {
        self.atoms.iter().filter(|a| !a.is_placeholder())
    }
}
