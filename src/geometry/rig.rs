//! Camera and light placement scaled to the structure's extent.

use glam::Vec3;

use super::math::look_at;
use crate::sink::{Camera, Light};

/// Camera object name.
pub const CAMERA_NAME: &str = "A_camera";
/// Light object name.
pub const LIGHT_NAME: &str = "A_light";

const DISTANCE_SCALE: f32 = 15.0;
const LIGHT_ENERGY: f32 = 1000.0;

fn rig_distance(extent: f32) -> f32 {
    extent.max(0.0).sqrt() * DISTANCE_SCALE
}

/// Camera at `(d, 0, d)` with `d = sqrt(extent) * 15`, looking at the
/// origin.
#[must_use]
pub fn camera(extent: f32) -> Camera {
    let d = rig_distance(extent);
    let location = Vec3::new(d, 0.0, d);
    Camera {
        name: CAMERA_NAME.to_owned(),
        location,
        rotation: look_at(location, Vec3::ZERO),
    }
}

/// Point light at `(l, 0.75 l, l)` with `l` half the camera distance.
#[must_use]
pub fn light(extent: f32) -> Light {
    let l = rig_distance(extent) * 0.5;
    Light {
        name: LIGHT_NAME.to_owned(),
        location: Vec3::new(l, 0.75 * l, l),
        energy: LIGHT_ENERGY,
    }
}
