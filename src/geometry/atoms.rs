//! Instanced atom geometry: one point mesh plus one representative ball per
//! element.

use glam::{Quat, Vec3};

use super::element_groups;
use crate::options::{AtomOptions, BallType};
use crate::pdb::AtomProp;
use crate::sink::{
    Instancing, MeshData, ObjectId, Primitive, PrimitiveKind, SceneSink,
    SinkError,
};

/// Objects created for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementInstance {
    /// Point mesh holding one vertex per atom.
    pub mesh: ObjectId,
    /// Ball replicated at every vertex of `mesh`.
    pub ball: ObjectId,
}

/// Mesh object name for an element group.
#[must_use]
pub fn mesh_name(element: &str) -> String {
    format!("Mesh_{element}")
}

/// Ball object name for an element group.
#[must_use]
pub fn ball_name(element: &str) -> String {
    format!("Ball_{element}")
}

fn ball_kind(options: &AtomOptions) -> PrimitiveKind {
    match options.ball {
        BallType::Nurbs => PrimitiveKind::NurbsSphere,
        BallType::UvSphere => PrimitiveKind::UvSphere {
            segments: options.mesh_azimuth,
            rings: options.mesh_zenith,
        },
        BallType::Metaball => PrimitiveKind::Metaball,
    }
}

/// Describe every element group of `atoms` to the sink.
///
/// Placeholders are skipped. Groups come out in order of first appearance.
pub fn build_atoms<S: SceneSink + ?Sized>(
    sink: &mut S,
    atoms: &[AtomProp],
    options: &AtomOptions,
) -> Result<Vec<ElementInstance>, SinkError> {
    let kind = ball_kind(options);
    let mut out = Vec::new();

    for group in element_groups(atoms) {
        let mesh = MeshData {
            name: mesh_name(group.name),
            vertices: group
                .members
                .iter()
                .map(|&i| atoms[i].position)
                .collect(),
            ..MeshData::default()
        };
        let mesh = sink.create_instanced_mesh(mesh, Instancing::Verts)?;

        let ball = sink.create_primitive(&Primitive {
            name: ball_name(group.name),
            kind,
            location: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::splat(group.radius * options.radius_factor),
            smooth: true,
        })?;
        sink.set_parent(ball, mesh)?;
        if let Some(material) = group.material {
            sink.assign_material(ball, material)?;
        }

        log::debug!(
            "{}: {} instances, radius {:.3}",
            group.name,
            group.members.len(),
            group.radius
        );
        out.push(ElementInstance { mesh, ball });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::test_util::atom;
    use crate::sink::{Material, ObjectKind, RecordingSink};

    #[test]
    fn one_mesh_and_ball_per_element() {
        let mut sink = RecordingSink::new();
        let carbon = sink
            .create_material(&Material {
                name: "Carbon".to_owned(),
                color: [0.2, 0.2, 0.2, 1.0],
            })
            .unwrap();
        let mut atoms = vec![
            atom("Carbon", [0.0; 3]),
            atom("Oxygen", [1.0, 0.0, 0.0]),
            AtomProp::chain_terminator(),
            atom("Carbon", [2.0, 0.0, 0.0]),
        ];
        atoms[0].material = Some(carbon);
        atoms[3].material = Some(carbon);

        let options = AtomOptions {
            radius_factor: 2.0,
            ..AtomOptions::default()
        };
        let made = build_atoms(&mut sink, &atoms, &options).unwrap();
        assert_eq!(made.len(), 2);

        let mesh = sink.object(made[0].mesh).unwrap();
        assert_eq!(mesh.name, "Mesh_Carbon");
        assert_eq!(
            mesh.kind,
            ObjectKind::Mesh {
                mesh: MeshData {
                    name: "Mesh_Carbon".to_owned(),
                    vertices: vec![Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)],
                    ..MeshData::default()
                },
                instancing: Instancing::Verts,
            }
        );

        let ball = sink.object(made[0].ball).unwrap();
        assert_eq!(ball.parent, Some(made[0].mesh));
        assert_eq!(ball.material, Some(carbon));
        let prim = ball.primitive().unwrap();
        assert_eq!(prim.scale, Vec3::splat(1.0));
        assert_eq!(
            prim.kind,
            PrimitiveKind::UvSphere {
                segments: 32,
                rings: 32
            }
        );

        // The oxygen group has no material bound yet.
        assert_eq!(sink.object(made[1].ball).unwrap().material, None);
    }

    #[test]
    fn ball_type_selects_primitive() {
        let options = AtomOptions {
            ball: BallType::Metaball,
            ..AtomOptions::default()
        };
        assert_eq!(ball_kind(&options), PrimitiveKind::Metaball);
        let options = AtomOptions {
            ball: BallType::Nurbs,
            ..AtomOptions::default()
        };
        assert_eq!(ball_kind(&options), PrimitiveKind::NurbsSphere);
    }
}
