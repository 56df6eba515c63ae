//! `ATOM` / `HETATM` / `TER` record parsing.

use std::io::BufRead;

use glam::Vec3;

use super::record_name;
use crate::elements::{ElementTable, RadiusType};
use crate::error::ImportError;
use crate::sink::MaterialId;

/// Short name and name carried by chain-terminator placeholders.
pub const TER_NAME: &str = "TER";

/// Short name given to vacancies (`X` symbols).
pub const VACANCY_SHORT_NAME: &str = "VAC";

/// One parsed atom.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomProp {
    /// Upper-cased element symbol (`TER` for placeholders).
    pub short_name: String,
    /// Element name, e.g. `Carbon`.
    pub name: String,
    /// Position in angstroms.
    pub position: Vec3,
    /// Radius resolved for the selected [`RadiusType`].
    pub radius: f32,
    /// RGBA display color.
    pub color: [f32; 4],
    /// Material bound once the importer has created one for this element.
    pub material: Option<MaterialId>,
}

impl AtomProp {
    /// Placeholder inserted for `TER` records so that atom serials keep
    /// lining up with list positions.
    #[must_use]
    pub fn chain_terminator() -> Self {
        Self {
            short_name: TER_NAME.to_owned(),
            name: TER_NAME.to_owned(),
            position: Vec3::ZERO,
            radius: 0.0,
            color: [0.0; 4],
            material: None,
        }
    }

    /// Whether this entry is a `TER` placeholder rather than a real atom.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.short_name == TER_NAME
    }
}

/// Atoms in file order plus the number of real (non-placeholder) atoms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtomList {
    /// Atoms in file order; serial `n` lives at index `n - 1`.
    pub atoms: Vec<AtomProp>,
    /// Atom count excluding `TER` placeholders.
    pub count: usize,
}

/// Stream a PDB file and collect its atoms.
///
/// Scanning starts at the first `ATOM`/`HETATM` record; `TER` records after
/// that point insert placeholders.
pub fn read_atoms<R: BufRead>(
    reader: R,
    table: &ElementTable,
    radius_type: RadiusType,
) -> Result<AtomList, ImportError> {
    let mut out = AtomList::default();
    let mut started = false;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = idx + 1;

        match record_name(&line) {
            "ATOM" | "HETATM" => {
                started = true;
                let atom = parse_atom(&line, line_num, table, radius_type)?;
                out.atoms.push(atom);
                out.count += 1;
            }
            "TER" if started => out.atoms.push(AtomProp::chain_terminator()),
            _ => {}
        }
    }

    log::debug!(
        "read {} atoms ({} chain terminators)",
        out.count,
        out.atoms.len() - out.count
    );
    Ok(out)
}

fn parse_atom(
    line: &str,
    line_num: usize,
    table: &ElementTable,
    radius_type: RadiusType,
) -> Result<AtomProp, ImportError> {
    let bytes = line.as_bytes();
    let symbol = element_symbol(bytes, table)
        .ok_or(ImportError::MalformedElement { line: line_num })?;

    let (short_name, name, radius, color) = if let Some(element) =
        table.get(&symbol)
    {
        (
            element.short_name.to_uppercase(),
            element.name.clone(),
            element.radius(radius_type),
            element.color,
        )
    } else if symbol.contains('X') {
        let vacancy = table.vacancy();
        (
            VACANCY_SHORT_NAME.to_owned(),
            vacancy.name.clone(),
            vacancy.radius(radius_type),
            vacancy.color,
        )
    } else {
        log::debug!("unknown element `{symbol}` on line {line_num}");
        let fallback = table.fallback();
        let upper = symbol.to_uppercase();
        (
            upper.clone(),
            upper,
            fallback.radius(radius_type),
            fallback.color,
        )
    };

    let position = Vec3::new(
        coordinate(bytes, 30..38, line_num, 'X')?,
        coordinate(bytes, 38..46, line_num, 'Y')?,
        coordinate(bytes, 46..54, line_num, 'Z')?,
    );

    Ok(AtomProp {
        short_name,
        name,
        position,
        radius,
        color,
        material: None,
    })
}

/// Element symbol from the atom-name columns 13-16, with columns 77-78 used
/// when the name columns do not resolve against the table.
///
/// Returns `None` when column 13 is neither blank, a digit, nor an uppercase
/// letter.
fn element_symbol(bytes: &[u8], table: &ElementTable) -> Option<String> {
    let at = |i: usize| bytes.get(i).copied().map(char::from);

    let mut symbol = String::with_capacity(2);
    match at(12)? {
        c if c == ' ' || c.is_ascii_digit() => {
            symbol.extend(at(13));
            if let Some(next) = at(14).filter(char::is_ascii_lowercase) {
                symbol.push(next);
            }
        }
        c if c.is_ascii_uppercase() => {
            symbol.push(c);
            if let Some(next) = at(13).filter(char::is_ascii_alphabetic) {
                symbol.push(next);
            }
        }
        _ => return None,
    }
    let symbol = symbol.trim().to_owned();

    if bytes.len() >= 78 && !table.contains(&symbol) {
        let column = String::from_utf8_lossy(&bytes[76..78]);
        let candidate = column.trim();
        if !candidate.is_empty()
            && candidate.chars().all(|c| c.is_ascii_alphabetic())
            && table.contains(candidate)
        {
            return Some(candidate.to_owned());
        }
    }
    Some(symbol)
}

fn coordinate(
    bytes: &[u8],
    range: std::ops::Range<usize>,
    line_num: usize,
    axis: char,
) -> Result<f32, ImportError> {
    let field = bytes
        .get(range)
        .and_then(|b| std::str::from_utf8(b).ok())
        .ok_or_else(|| {
            ImportError::parse(line_num, format!("missing {axis} coordinate"))
        })?;
    field.trim().parse().map_err(|_| {
        ImportError::parse(
            line_num,
            format!("invalid {axis} coordinate `{}`", field.trim()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Result<AtomList, ImportError> {
        read_atoms(
            text.as_bytes(),
            ElementTable::default_table(),
            RadiusType::Used,
        )
    }

    const CRAMBIN: &str = "\
HEADER    PLANT PROTEIN                           30-APR-81   1CRN
ATOM      1  N   THR A   1      17.047  14.099   3.625  1.00 13.79           N
ATOM      2  CA  THR A   1      16.967  12.784   4.338  1.00 10.80           C
TER       3      THR A   1
HETATM    4 FE   HEM A   2      -1.250   0.500  10.000  1.00 20.00          FE
HETATM    5 CA    CA A   3       0.000   0.000   0.000  1.00 20.00          CA
END
";

    #[test]
    fn parses_positions_exactly() {
        let list = read(CRAMBIN).unwrap();
        assert_eq!(list.atoms.len(), 5);
        assert_eq!(list.count, 4);
        let expected: Vec<f32> = ["17.047", "14.099", "3.625"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(list.atoms[0].position.to_array().to_vec(), expected);
        assert_eq!(list.atoms[3].position, Vec3::new(-1.25, 0.5, 10.0));
    }

    #[test]
    fn resolves_elements_from_name_columns() {
        let list = read(CRAMBIN).unwrap();
        let names: Vec<&str> =
            list.atoms.iter().map(|a| a.short_name.as_str()).collect();
        assert_eq!(names, ["N", "C", "TER", "FE", "CA"]);
        assert_eq!(list.atoms[1].name, "Carbon");
        assert_eq!(list.atoms[3].name, "Iron");
        assert_eq!(list.atoms[4].name, "Calcium");
        assert_eq!(list.atoms[1].radius, 0.77);
    }

    #[test]
    fn radius_type_selects_column() {
        let table = ElementTable::default_table();
        let list =
            read_atoms(CRAMBIN.as_bytes(), table, RadiusType::Atomic).unwrap();
        assert_eq!(list.atoms[0].radius, table.get("N").unwrap().radii[2]);
        assert_eq!(list.atoms[3].radius, table.get("Fe").unwrap().radii[2]);
    }

    #[test]
    fn ter_inserts_placeholder() {
        let list = read(CRAMBIN).unwrap();
        let ter = &list.atoms[2];
        assert!(ter.is_placeholder());
        assert_eq!(ter.radius, 0.0);
        assert_eq!(ter.color, [0.0; 4]);
        assert_eq!(ter.position, Vec3::ZERO);
    }

    #[test]
    fn ter_before_first_atom_is_ignored() {
        let text = "TER\nATOM      1  O   HOH A   1       1.000   2.000   3.000\n";
        let list = read(text).unwrap();
        assert_eq!(list.atoms.len(), 1);
        assert_eq!(list.atoms[0].short_name, "O");
    }

    #[test]
    fn vacancy_and_unknown_fallbacks() {
        let text = "\
ATOM      1  X   VAC A   1       0.000   0.000   0.000
ATOM      2  Q   UNK A   2       1.000   0.000   0.000
";
        let list = read(text).unwrap();
        let table = ElementTable::default_table();
        assert_eq!(list.atoms[0].short_name, "VAC");
        assert_eq!(list.atoms[0].name, "Vacancy");
        assert_eq!(list.atoms[0].color, table.vacancy().color);
        assert_eq!(list.atoms[1].short_name, "Q");
        assert_eq!(list.atoms[1].name, "Q");
        assert_eq!(list.atoms[1].radius, table.fallback().radii[0]);
    }

    #[test]
    fn element_column_resolves_unknown_name_columns() {
        let text = "HETATM    1  Q1  LIG A   1       0.000   0.000   0.000  1.00  0.00           S\n";
        let list = read(text).unwrap();
        assert_eq!(list.atoms[0].short_name, "S");
        assert_eq!(list.atoms[0].name, "Sulfur");
    }

    #[test]
    fn malformed_element_columns_are_reported() {
        let text = "ATOM      1 *N   THR A   1       1.000   2.000   3.000\n";
        let err = read(text).unwrap_err();
        assert!(matches!(err, ImportError::MalformedElement { line: 1 }));
    }

    #[test]
    fn bad_coordinates_are_reported() {
        let text = "ATOM      1  N   THR A   1       1.000   abcde   3.000\n";
        let err = read(text).unwrap_err();
        assert!(matches!(err, ImportError::Parse { line: 1, .. }));
    }
}
