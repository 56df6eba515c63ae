//! Skinned sticks: the bond graph as an edge skeleton under a skin modifier.

use rustc_hash::FxHashMap;

use crate::options::StickOptions;
use crate::pdb::{AtomProp, StickProp};
use crate::sink::{
    MaterialId, MeshData, ObjectId, SceneSink, SinkError, SkinModifier,
};

/// Skeleton object name.
pub const SKELETON_NAME: &str = "Sticks";

/// Edge skeleton of the bond graph.
///
/// Only atoms that take part in at least one bond become vertices, so chain
/// terminators and lone ions do not turn into skin blobs. Multiple bonds are
/// drawn as one edge.
#[must_use]
pub fn skeleton(atoms: &[AtomProp], sticks: &[StickProp]) -> MeshData {
    let mut mesh = MeshData {
        name: SKELETON_NAME.to_owned(),
        ..MeshData::default()
    };
    let mut vertex_of: FxHashMap<usize, u32> = FxHashMap::default();

    for stick in sticks {
        let (Some(a), Some(b)) = (
            stick.atom1.checked_sub(1).filter(|&i| i < atoms.len()),
            stick.atom2.checked_sub(1).filter(|&i| i < atoms.len()),
        ) else {
            continue;
        };
        if atoms[a].is_placeholder()
            || atoms[b].is_placeholder()
            || atoms[a].position.distance_squared(atoms[b].position) < 1e-12
        {
            continue;
        }
        let mut vertex = |i: usize| {
            *vertex_of.entry(i).or_insert_with(|| {
                mesh.vertices.push(atoms[i].position);
                mesh.vertices.len() as u32 - 1
            })
        };
        let edge = [vertex(a), vertex(b)];
        mesh.edges.push(edge);
    }
    mesh
}

/// Build the skinned skeleton. Returns `None` when no stick is usable.
pub fn build<S: SceneSink + ?Sized>(
    sink: &mut S,
    atoms: &[AtomProp],
    sticks: &[StickProp],
    options: &StickOptions,
    stick_material: Option<MaterialId>,
) -> Result<Option<ObjectId>, SinkError> {
    let mesh = skeleton(atoms, sticks);
    if mesh.edges.is_empty() {
        return Ok(None);
    }
    log::debug!(
        "skin skeleton: {} vertices, {} edges",
        mesh.vertices.len(),
        mesh.edges.len()
    );
    let object = sink.create_mesh(mesh)?;
    sink.add_skin(
        object,
        &SkinModifier {
            radius: options.diameter,
            subdiv_view: options.subdiv_view,
            subdiv_render: options.subdiv_render,
        },
    )?;
    if let Some(material) = stick_material {
        sink.assign_material(object, material)?;
    }
    Ok(Some(object))
}
