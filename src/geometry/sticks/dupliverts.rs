//! Segmented sticks: every bond is cut into `unit_length` pieces, each piece
//! becomes one small quad on an anchor mesh, and a cylinder prototype is
//! replicated over the quads with face instancing.

use glam::{Quat, Vec3};
use rustc_hash::FxHashMap;

use super::{bond_lines, BondLine};
use crate::elements::STICK_SYMBOL;
use crate::geometry::math::find_perpendicular;
use crate::options::StickOptions;
use crate::pdb::{AtomProp, StickProp};
use crate::sink::{
    Instancing, MaterialId, MeshData, ObjectId, Primitive, PrimitiveKind,
    SceneSink, SinkError,
};

/// Anchor quads collected for one material group.
#[derive(Debug, Default)]
struct AnchorGroup {
    material: Option<MaterialId>,
    vertices: Vec<Vec3>,
    faces: Vec<[u32; 4]>,
}

impl AnchorGroup {
    /// Add `count` segments running from `start` along `-axis`.
    fn push_segments(
        &mut self,
        start: Vec3,
        axis: Vec3,
        count: usize,
        unit: f32,
        radius: f32,
    ) {
        let across = anchor_normal(start, axis);
        let side = across.cross(axis);
        for j in 0..count {
            let center = start - axis * (unit / 2.0) - axis * (unit * j as f32);
            let base = self.vertices.len() as u32;
            self.vertices.extend([
                center + across * radius,
                center - across * radius,
                center + side * radius,
                center - side * radius,
            ]);
            self.faces.push([base, base + 2, base + 1, base + 3]);
        }
    }
}

/// Unit vector from the bond line towards its closest approach to the
/// origin, or any perpendicular when the line passes through the origin.
fn anchor_normal(point: Vec3, axis: Vec3) -> Vec3 {
    let radial = point - axis * axis.dot(point);
    radial
        .try_normalize()
        .unwrap_or_else(|| find_perpendicular(axis))
}

/// Segments needed to cover `length` with pieces of `unit`.
fn segment_count(length: f32, unit: f32) -> usize {
    (length / unit).ceil() as usize
}

/// Anchor mesh name for a material group.
#[must_use]
pub fn anchor_name(group: &str) -> String {
    format!("Sticks_{group}")
}

/// Cylinder prototype name for a material group.
#[must_use]
pub fn cylinder_name(group: &str) -> String {
    format!("Sticks_Cylinder_{group}")
}

fn split_line(
    line: &BondLine,
    atoms: &[AtomProp],
    options: &StickOptions,
    groups: &mut Vec<(String, AnchorGroup)>,
    index: &mut FxHashMap<String, usize>,
    stick_material: Option<MaterialId>,
) {
    let mut group_for = |name: &str, material: Option<MaterialId>| -> usize {
        if let Some(&slot) = index.get(name) {
            return slot;
        }
        groups.push((
            name.to_owned(),
            AnchorGroup {
                material,
                ..AnchorGroup::default()
            },
        ));
        let _ = index.insert(name.to_owned(), groups.len() - 1);
        groups.len() - 1
    };

    let unit = options.unit_length;
    let length = line.length();
    let axis = line.delta() / length;

    if options.color {
        let half = segment_count(length, 2.0 * unit);
        let first = &atoms[line.atom1];
        let second = &atoms[line.atom2];
        let a = group_for(&first.name, first.material);
        let b = group_for(&second.name, second.material);
        groups[a]
            .1
            .push_segments(line.start, axis, half, unit, options.diameter);
        groups[b]
            .1
            .push_segments(line.end, -axis, half, unit, options.diameter);
    } else {
        let slot = group_for(STICK_SYMBOL, stick_material);
        groups[slot].1.push_segments(
            line.start,
            axis,
            segment_count(length, unit),
            unit,
            options.diameter,
        );
    }
}

/// Build segmented sticks. Returns one anchor mesh per material group; each
/// has its cylinder prototype parented to it.
pub fn build<S: SceneSink + ?Sized>(
    sink: &mut S,
    atoms: &[AtomProp],
    sticks: &[StickProp],
    options: &StickOptions,
    stick_material: Option<MaterialId>,
) -> Result<Vec<ObjectId>, SinkError> {
    let mut groups: Vec<(String, AnchorGroup)> = Vec::new();
    let mut index: FxHashMap<String, usize> = FxHashMap::default();

    for line in bond_lines(atoms, sticks, options.repeat_spacing()) {
        split_line(
            &line,
            atoms,
            options,
            &mut groups,
            &mut index,
            stick_material,
        );
    }

    let mut out = Vec::with_capacity(groups.len());
    for (name, group) in groups {
        if group.faces.is_empty() {
            continue;
        }
        log::debug!("{name}: {} stick segments", group.faces.len());
        let mesh = sink.create_instanced_mesh(
            MeshData {
                name: anchor_name(&name),
                vertices: group.vertices,
                faces: group.faces,
                ..MeshData::default()
            },
            Instancing::Faces,
        )?;
        let cylinder = sink.create_primitive(&Primitive {
            name: cylinder_name(&name),
            kind: PrimitiveKind::Cylinder {
                sectors: options.sectors,
                radius: options.diameter,
                depth: options.unit_length,
            },
            location: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            smooth: options.smooth,
        })?;
        sink.set_parent(cylinder, mesh)?;
        if let Some(material) = group.material {
            sink.assign_material(cylinder, material)?;
        }
        out.push(mesh);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::test_util::atom;
    use crate::sink::RecordingSink;

    fn options(color: bool) -> StickOptions {
        StickOptions {
            color,
            unit_length: 0.5,
            diameter: 0.1,
            ..StickOptions::default()
        }
    }

    fn face_centers(mesh: &MeshData) -> Vec<Vec3> {
        mesh.faces
            .iter()
            .map(|f| {
                f.iter().map(|&i| mesh.vertices[i as usize]).sum::<Vec3>() / 4.0
            })
            .collect()
    }

    #[test]
    fn colored_bond_is_split_between_elements() {
        let atoms = vec![
            atom("Carbon", [0.0, 1.0, 0.0]),
            atom("Oxygen", [2.0, 1.0, 0.0]),
        ];
        let sticks = [StickProp {
            atom1: 1,
            atom2: 2,
            number: 1,
            dist: None,
        }];
        let mut sink = RecordingSink::new();
        let made =
            build(&mut sink, &atoms, &sticks, &options(true), None).unwrap();
        assert_eq!(made.len(), 2);

        let carbon = sink.find("Sticks_Carbon").unwrap().1.mesh().unwrap();
        let oxygen = sink.find("Sticks_Oxygen").unwrap().1.mesh().unwrap();
        // length 2, unit 0.5 -> two segments per half
        assert_eq!(carbon.faces.len(), 2);
        assert_eq!(oxygen.faces.len(), 2);

        // Each half starts at its own atom.
        let xs: Vec<f32> = face_centers(carbon)
            .iter()
            .chain(face_centers(oxygen).iter())
            .map(|c| c.x)
            .collect();
        let expected = [0.25, 0.75, 1.75, 1.25];
        for (x, e) in xs.iter().zip(expected) {
            assert!((x - e).abs() < 1e-5, "{x} != {e}");
        }

        let (cyl_id, cyl) = sink.find("Sticks_Cylinder_Carbon").unwrap();
        assert_eq!(cyl.parent, sink.find("Sticks_Carbon").map(|(id, _)| id));
        assert!(sink.object(cyl_id).unwrap().primitive().is_some());
    }

    #[test]
    fn colored_halves_stop_at_their_atoms() {
        // 2.1 is not a multiple of two units, so each half overlaps the
        // other near the middle but never passes the far atom.
        let atoms = vec![
            atom("Carbon", [0.0, 1.0, 0.0]),
            atom("Oxygen", [2.1, 1.0, 0.0]),
        ];
        let sticks = [StickProp {
            atom1: 1,
            atom2: 2,
            number: 1,
            dist: None,
        }];
        let mut sink = RecordingSink::new();
        let _ =
            build(&mut sink, &atoms, &sticks, &options(true), None).unwrap();

        let carbon = sink.find("Sticks_Carbon").unwrap().1.mesh().unwrap();
        let oxygen = sink.find("Sticks_Oxygen").unwrap().1.mesh().unwrap();
        let carbon = face_centers(carbon);
        let oxygen = face_centers(oxygen);
        assert_eq!(carbon.len(), 3);
        assert_eq!(oxygen.len(), 3);
        for c in carbon.iter().chain(&oxygen) {
            assert!(c.x >= 0.25 - 1e-5 && c.x <= 1.85 + 1e-5, "{c}");
            assert!((c.y - 1.0).abs() < 1e-5);
        }
        let nearest = |centers: &[Vec3], x: f32| {
            centers
                .iter()
                .map(|c| (c.x - x).abs())
                .fold(f32::INFINITY, f32::min)
        };
        assert!((nearest(&carbon, 0.0) - 0.25).abs() < 1e-5);
        assert!((nearest(&oxygen, 2.1) - 0.25).abs() < 1e-5);
    }

    #[test]
    fn anchor_quads_are_perpendicular_to_the_bond() {
        let atoms = vec![
            atom("Carbon", [0.0, 0.0, 1.0]),
            atom("Carbon", [0.0, 0.0, -1.0]),
        ];
        let sticks = [StickProp {
            atom1: 1,
            atom2: 2,
            number: 1,
            dist: None,
        }];
        let mut sink = RecordingSink::new();
        let _ =
            build(&mut sink, &atoms, &sticks, &options(false), None).unwrap();
        let mesh = sink.find("Sticks_Stick").unwrap().1.mesh().unwrap();
        assert_eq!(mesh.faces.len(), 4);
        for face in &mesh.faces {
            let v: Vec<Vec3> =
                face.iter().map(|&i| mesh.vertices[i as usize]).collect();
            // Quad corners share the segment's z and sit at the stick radius.
            let z = v[0].z;
            for p in &v {
                assert!((p.z - z).abs() < 1e-6);
                assert!((p.truncate().length() - 0.1).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn double_bond_yields_two_symmetric_rows() {
        let atoms = vec![
            atom("Carbon", [-1.0, 0.0, 0.0]),
            atom("Carbon", [1.0, 0.0, 0.0]),
        ];
        let sticks = [StickProp {
            atom1: 1,
            atom2: 2,
            number: 2,
            dist: Some(Vec3::Y),
        }];
        let mut sink = RecordingSink::new();
        let opts = options(false);
        let _ = build(&mut sink, &atoms, &sticks, &opts, None).unwrap();
        let mesh = sink.find("Sticks_Stick").unwrap().1.mesh().unwrap();
        let centers = face_centers(mesh);
        assert_eq!(centers.len(), 8);
        let spacing = opts.repeat_spacing();
        let (upper, lower): (Vec<Vec3>, Vec<Vec3>) =
            centers.iter().partition(|c| c.y > 0.0);
        assert_eq!(upper.len(), 4);
        assert_eq!(lower.len(), 4);
        for (u, l) in upper.iter().zip(&lower) {
            assert!((u.y - spacing).abs() < 1e-5);
            assert!((l.y + spacing).abs() < 1e-5);
            assert!((u.x - l.x).abs() < 1e-5);
        }
    }
}
