//! Scene geometry built from parsed atoms and sticks.
//!
//! Positions are first recentred and scaled in place, then handed to the
//! atom, stick and rig builders which describe objects to a
//! [`SceneSink`](crate::sink::SceneSink).

pub mod atoms;
pub(crate) mod math;
pub mod rig;
pub mod sticks;

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::pdb::AtomProp;
use crate::sink::MaterialId;

/// Mean position of all real atoms, or the origin if there are none.
#[must_use]
pub fn centroid(atoms: &[AtomProp]) -> Vec3 {
    let (sum, count) = atoms
        .iter()
        .filter(|a| !a.is_placeholder())
        .fold((Vec3::ZERO, 0usize), |(sum, n), a| (sum + a.position, n + 1));
    if count == 0 {
        Vec3::ZERO
    } else {
        sum / count as f32
    }
}

/// Move the centroid of the real atoms to the origin and return the old
/// centroid. Placeholders stay at the origin.
pub fn recentre(atoms: &mut [AtomProp]) -> Vec3 {
    let center = centroid(atoms);
    for atom in atoms.iter_mut().filter(|a| !a.is_placeholder()) {
        atom.position -= center;
    }
    center
}

/// Multiply every real atom position by `factor`.
pub fn scale_distances(atoms: &mut [AtomProp], factor: f32) {
    if (factor - 1.0).abs() <= f32::EPSILON {
        return;
    }
    for atom in atoms.iter_mut().filter(|a| !a.is_placeholder()) {
        atom.position *= factor;
    }
}

/// Largest distance of a real atom from the origin.
#[must_use]
pub fn extent(atoms: &[AtomProp]) -> f32 {
    atoms
        .iter()
        .filter(|a| !a.is_placeholder())
        .map(|a| a.position.length())
        .fold(0.0f32, f32::max)
}

/// Real atoms sharing one element name.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementGroup<'a> {
    /// Element name, e.g. `Carbon`.
    pub name: &'a str,
    /// Radius of the group's atoms.
    pub radius: f32,
    /// Material bound to the group's atoms.
    pub material: Option<MaterialId>,
    /// Indices into the atom list.
    pub members: Vec<usize>,
}

/// Group real atoms by element name, in order of first appearance.
#[must_use]
pub fn element_groups(atoms: &[AtomProp]) -> Vec<ElementGroup<'_>> {
    let mut groups: Vec<ElementGroup<'_>> = Vec::new();
    let mut by_name: FxHashMap<&str, usize> = FxHashMap::default();
    for (i, atom) in atoms.iter().enumerate() {
        if atom.is_placeholder() {
            continue;
        }
        let slot = *by_name.entry(atom.name.as_str()).or_insert_with(|| {
            groups.push(ElementGroup {
                name: &atom.name,
                radius: atom.radius,
                material: atom.material,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].members.push(i);
    }
    groups
}
