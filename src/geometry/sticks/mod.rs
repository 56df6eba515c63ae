//! Bond geometry in three styles.
//!
//! - [`StickStyle::Dupliverts`]: short cylinder segments instanced over the
//!   faces of per-element anchor meshes ([`dupliverts`]).
//! - [`StickStyle::Skin`]: one edge skeleton wrapped by a skin modifier
//!   ([`skin`]).
//! - [`StickStyle::Cylinders`]: one explicit cylinder per bond, optionally
//!   joined in batches ([`cylinders`]).

pub mod cylinders;
pub mod dupliverts;
pub mod skin;

use glam::Vec3;

use crate::options::{StickOptions, StickStyle};
use crate::pdb::{AtomProp, StickProp};
use crate::sink::{MaterialId, ObjectId, SceneSink, SinkError};

/// One drawable line of a bond. Double and triple bonds yield two or three.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondLine {
    /// 0-based index of the first atom.
    pub atom1: usize,
    /// 0-based index of the second atom.
    pub atom2: usize,
    /// Start point (first atom, shifted by the repeat offset).
    pub start: Vec3,
    /// End point (second atom, shifted by the repeat offset).
    pub end: Vec3,
}

impl BondLine {
    /// Vector from the end point to the start point.
    #[must_use]
    pub fn delta(&self) -> Vec3 {
        self.start - self.end
    }

    /// Bond length.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.delta().length()
    }
}

/// Perpendicular offsets of the parallel lines of one stick.
///
/// Single bonds get one line through the atoms. Double bonds are spread
/// `+spacing` and `-spacing` along the stick's offset direction, triple
/// bonds additionally keep the central line.
#[must_use]
pub fn repeat_offsets(stick: &StickProp, spacing: f32) -> Vec<Vec3> {
    let Some(dir) = stick.dist else {
        return vec![Vec3::ZERO];
    };
    let d = dir * spacing;
    match stick.number {
        2 => vec![d, -d],
        3 => vec![d, Vec3::ZERO, -d],
        _ => vec![Vec3::ZERO],
    }
}

/// Every drawable line of `sticks`, zero-length bonds skipped.
#[must_use]
pub fn bond_lines(
    atoms: &[AtomProp],
    sticks: &[StickProp],
    spacing: f32,
) -> Vec<BondLine> {
    let mut lines = Vec::with_capacity(sticks.len());
    for stick in sticks {
        let (Some(a), Some(b)) = (
            stick.atom1.checked_sub(1).and_then(|i| atoms.get(i)),
            stick.atom2.checked_sub(1).and_then(|i| atoms.get(i)),
        ) else {
            log::warn!(
                "stick {}-{} references a missing atom",
                stick.atom1,
                stick.atom2
            );
            continue;
        };
        if a.is_placeholder() || b.is_placeholder() {
            continue;
        }
        if a.position.distance_squared(b.position) < 1e-12 {
            log::warn!(
                "stick {}-{} has zero length, skipping",
                stick.atom1,
                stick.atom2
            );
            continue;
        }
        for offset in repeat_offsets(stick, spacing) {
            lines.push(BondLine {
                atom1: stick.atom1 - 1,
                atom2: stick.atom2 - 1,
                start: a.position + offset,
                end: b.position + offset,
            });
        }
    }
    lines
}

/// Build bond geometry in the style `options` selects.
///
/// `stick_material` is used wherever sticks are not colored per element.
/// Returns the top-level objects created.
pub fn build_sticks<S: SceneSink + ?Sized>(
    sink: &mut S,
    atoms: &[AtomProp],
    sticks: &[StickProp],
    options: &StickOptions,
    stick_material: Option<MaterialId>,
) -> Result<Vec<ObjectId>, SinkError> {
    if sticks.is_empty() {
        return Ok(Vec::new());
    }
    log::debug!("building {} sticks as {:?}", sticks.len(), options.style);
    match options.style {
        StickStyle::Dupliverts => {
            dupliverts::build(sink, atoms, sticks, options, stick_material)
        }
        StickStyle::Skin => {
            skin::build(sink, atoms, sticks, options, stick_material)
                .map(|object| object.into_iter().collect())
        }
        StickStyle::Cylinders => {
            cylinders::build(sink, atoms, sticks, options, stick_material)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::test_util::atom;

    fn stick(number: u8, dist: Option<Vec3>) -> StickProp {
        StickProp {
            atom1: 1,
            atom2: 2,
            number,
            dist,
        }
    }

    #[test]
    fn offsets_are_symmetric() {
        assert_eq!(repeat_offsets(&stick(1, None), 0.5), [Vec3::ZERO]);
        let double = repeat_offsets(&stick(2, Some(Vec3::Y)), 0.5);
        assert_eq!(double, [Vec3::Y * 0.5, Vec3::Y * -0.5]);
        assert_eq!(double[0] + double[1], Vec3::ZERO);
        let triple = repeat_offsets(&stick(3, Some(Vec3::Y)), 0.5);
        assert_eq!(triple, [Vec3::Y * 0.5, Vec3::ZERO, Vec3::Y * -0.5]);
    }

    #[test]
    fn lines_skip_degenerate_sticks() {
        let atoms = vec![
            atom("Carbon", [0.0; 3]),
            atom("Carbon", [1.5, 0.0, 0.0]),
            atom("Carbon", [0.0; 3]),
        ];
        let sticks = vec![
            stick(2, Some(Vec3::Y)),
            StickProp {
                atom1: 1,
                atom2: 3,
                number: 1,
                dist: None,
            },
        ];
        let lines = bond_lines(&atoms, &sticks, 0.2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].start, Vec3::new(0.0, 0.2, 0.0));
        assert_eq!(lines[1].end, Vec3::new(1.5, -0.2, 0.0));
        assert!((lines[0].length() - 1.5).abs() < 1e-6);
    }
}
