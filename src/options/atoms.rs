use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::elements::RadiusType;

/// Representative object instanced at every atom of an element.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum BallType {
    /// NURBS sphere.
    Nurbs,
    /// UV sphere with `mesh_azimuth` x `mesh_zenith` segments.
    #[default]
    UvSphere,
    /// Metaball.
    Metaball,
}

/// How atoms are drawn and placed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Atoms", inline)]
#[serde(default)]
pub struct AtomOptions {
    /// Ball primitive.
    #[schemars(title = "Ball Type")]
    pub ball: BallType,
    /// UV sphere segments around the azimuth.
    #[schemars(title = "Azimuth", range(min = 3, max = 256))]
    pub mesh_azimuth: u32,
    /// UV sphere rings from pole to pole.
    #[schemars(title = "Zenith", range(min = 3, max = 256))]
    pub mesh_zenith: u32,
    /// Multiplier on every atom radius.
    #[schemars(title = "Radius Factor", range(min = 0.0, max = 10.0), extend("step" = 0.05))]
    pub radius_factor: f32,
    /// Which tabulated radius atoms use.
    #[schemars(title = "Radius Type")]
    pub radius_type: RadiusType,
    /// Multiplier on interatomic distances, applied after centring.
    #[schemars(title = "Distance Factor", range(min = 0.0, max = 100.0), extend("step" = 0.1))]
    pub distance_factor: f32,
}

impl Default for AtomOptions {
    fn default() -> Self {
        Self {
            ball: BallType::UvSphere,
            mesh_azimuth: 32,
            mesh_zenith: 32,
            radius_factor: 1.0,
            radius_type: RadiusType::Used,
            distance_factor: 1.0,
        }
    }
}
