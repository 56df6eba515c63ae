//! `CONECT` record parsing.

use std::io::BufRead;

use glam::Vec3;
use rustc_hash::FxHashSet;

use super::atoms::AtomProp;
use super::record_name;
use crate::error::ImportError;
use crate::geometry::math::find_perpendicular;

/// Width of one atom-serial field in a `CONECT` record.
const SERIAL_WIDTH: usize = 5;

/// One bond between two atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct StickProp {
    /// 1-based serial of the first atom.
    pub atom1: usize,
    /// 1-based serial of the second atom.
    pub atom2: usize,
    /// Bond multiplicity, 1 to 3.
    pub number: u8,
    /// Unit vector perpendicular to the bond along which the parallel
    /// cylinders of a double/triple bond are spread. `None` for single bonds.
    pub dist: Option<Vec3>,
}

impl StickProp {
    /// Whether the stick joins `a` and `b`, in either order.
    #[must_use]
    pub fn connects(&self, a: usize, b: usize) -> bool {
        (self.atom1 == a && self.atom2 == b)
            || (self.atom1 == b && self.atom2 == a)
    }
}

/// Parsed sticks plus the number of repeated pairs that were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StickList {
    /// Unique sticks in file order.
    pub sticks: Vec<StickProp>,
    /// How many already-known atom pairs were seen again.
    pub duplicates: usize,
}

/// Stream a PDB file and collect its `CONECT` bonds.
///
/// Scanning starts at the first `CONECT` record and stops at the first
/// record of any other type after it. With `infer_orders`, a partner listed
/// two or three times on one line becomes a double or triple bond.
pub fn read_sticks<R: BufRead>(
    reader: R,
    atoms: &[AtomProp],
    infer_orders: bool,
) -> Result<StickList, ImportError> {
    let mut out = StickList::default();
    let mut seen: FxHashSet<(usize, usize)> = FxHashSet::default();
    let mut started = false;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if record_name(&line) != "CONECT" {
            if started {
                break;
            }
            continue;
        }
        started = true;

        let serials = conect_serials(&line);
        let Some((&atom1, partners)) = serials.split_first() else {
            continue;
        };
        if !is_valid(atom1, atoms) {
            log::warn!(
                "CONECT on line {} references unknown atom {atom1}",
                idx + 1
            );
            continue;
        }

        for &atom2 in partners {
            if !is_valid(atom2, atoms) || atom2 == atom1 {
                log::warn!(
                    "CONECT on line {} skips bond {atom1}-{atom2}",
                    idx + 1
                );
                continue;
            }

            let (number, dist) = if infer_orders {
                bond_order(atom1, atom2, partners, atoms)
            } else {
                (1, None)
            };

            if !seen.insert((atom1.min(atom2), atom1.max(atom2))) {
                out.duplicates += 1;
                continue;
            }
            out.sticks.push(StickProp {
                atom1,
                atom2,
                number,
                dist,
            });
        }
    }

    log::debug!(
        "read {} sticks ({} duplicates skipped)",
        out.sticks.len(),
        out.duplicates
    );
    Ok(out)
}

/// Atom serials of a `CONECT` record, read as fixed 5-character fields.
///
/// Large serials may touch without a separating space, so whitespace
/// splitting would merge them.
fn conect_serials(line: &str) -> Vec<usize> {
    line.trim_end()
        .as_bytes()
        .get(6..)
        .unwrap_or_default()
        .chunks(SERIAL_WIDTH)
        .filter_map(|field| {
            let field = std::str::from_utf8(field).ok()?.trim();
            if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            field.parse().ok()
        })
        .collect()
}

fn is_valid(serial: usize, atoms: &[AtomProp]) -> bool {
    (1..=atoms.len()).contains(&serial)
}

fn bond_order(
    atom1: usize,
    atom2: usize,
    partners: &[usize],
    atoms: &[AtomProp],
) -> (u8, Option<Vec3>) {
    let count = partners.iter().filter(|&&p| p == atom2).count();
    match count {
        2 | 3 => (
            count as u8,
            Some(offset_direction(atom1, atom2, partners, atoms)),
        ),
        n if n > 3 => {
            log::warn!(
                "bond {atom1}-{atom2} listed {n} times, drawing it as a single bond"
            );
            (1, None)
        }
        _ => (1, None),
    }
}

/// Direction in which the parallel cylinders of a multiple bond are spread.
///
/// With at least two distinct partners the offset lies in the plane spanned
/// by the first two of them; otherwise it is `(dy, -dx, 0)` of the bond.
fn offset_direction(
    atom1: usize,
    atom2: usize,
    partners: &[usize],
    atoms: &[AtomProp],
) -> Vec3 {
    let pos = |serial: usize| atoms[serial - 1].position;

    let mut distinct: Vec<usize> = Vec::with_capacity(2);
    for &p in partners {
        if is_valid(p, atoms) && !distinct.contains(&p) {
            distinct.push(p);
        }
    }

    let bond = pos(atom1) - pos(atom2);
    let candidate = if let [first, second, ..] = distinct[..] {
        let plane_normal =
            (pos(atom1) - pos(first)).cross(pos(atom1) - pos(second));
        bond.cross(plane_normal)
    } else {
        Vec3::new(bond.y, -bond.x, 0.0)
    };
    candidate
        .try_normalize()
        .unwrap_or_else(|| find_perpendicular(bond.normalize_or_zero()))
}
