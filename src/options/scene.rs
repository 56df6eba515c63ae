use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Placement of the structure and the optional camera/light rig.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
pub struct SceneOptions {
    /// Move the centroid of all atoms to the origin.
    #[schemars(title = "Center")]
    pub put_to_center: bool,
    /// Add a camera looking at the structure.
    #[schemars(title = "Camera")]
    pub use_camera: bool,
    /// Add a point light.
    #[schemars(title = "Light")]
    pub use_light: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            put_to_center: true,
            use_camera: false,
            use_light: false,
        }
    }
}
