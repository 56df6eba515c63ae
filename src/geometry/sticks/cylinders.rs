//! Explicit cylinders: one per bond line, optionally merged into one object.

use glam::Vec3;

use super::bond_lines;
use crate::geometry::math::rotation_onto;
use crate::options::StickOptions;
use crate::pdb::{AtomProp, StickProp};
use crate::sink::{
    MaterialId, ObjectId, Primitive, PrimitiveKind, SceneSink, SinkError,
};

/// Name of the final joined object.
pub const JOINED_NAME: &str = "Sticks_Cylinders";

/// Build one cylinder per bond line.
///
/// With `one_object`, cylinders are first joined in batches of
/// `one_object_nr` and the batches are then joined into one object, which is
/// the only object returned. Otherwise every cylinder is returned.
pub fn build<S: SceneSink + ?Sized>(
    sink: &mut S,
    atoms: &[AtomProp],
    sticks: &[StickProp],
    options: &StickOptions,
    stick_material: Option<MaterialId>,
) -> Result<Vec<ObjectId>, SinkError> {
    let mut cylinders = Vec::new();
    for (i, line) in bond_lines(atoms, sticks, options.repeat_spacing())
        .into_iter()
        .enumerate()
    {
        let axis = line.end - line.start;
        let cylinder = sink.create_primitive(&Primitive {
            name: format!("Stick_Cylinder_{i}"),
            kind: PrimitiveKind::Cylinder {
                sectors: options.sectors,
                radius: options.diameter,
                depth: axis.length(),
            },
            location: (line.start + line.end) / 2.0,
            rotation: rotation_onto(axis),
            scale: Vec3::ONE,
            smooth: options.smooth,
        })?;
        let material = if options.color {
            atoms[line.atom1].material
        } else {
            stick_material
        };
        if let Some(material) = material {
            sink.assign_material(cylinder, material)?;
        }
        cylinders.push(cylinder);
    }

    if !options.one_object || cylinders.len() < 2 {
        return Ok(cylinders);
    }

    let batch_size = options.one_object_nr.max(1);
    let mut batches = Vec::with_capacity(cylinders.len().div_ceil(batch_size));
    for (k, chunk) in cylinders.chunks(batch_size).enumerate() {
        batches.push(sink.join(chunk, &format!("Sticks_Batch_{k}"))?);
    }
    log::debug!(
        "joined {} cylinders in {} batches",
        cylinders.len(),
        batches.len()
    );
    Ok(vec![sink.join(&batches, JOINED_NAME)?])
}
