//! Host-engine seam.
//!
//! The import pipeline never talks to a concrete 3D engine. It describes
//! materials, meshes, primitives and scene rigs as plain values and hands
//! them to a [`SceneSink`]. [`RecordingSink`] keeps everything in memory for
//! headless use and tests.

mod recording;

use std::fmt;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

pub use recording::{ObjectKind, RecordedObject, RecordingSink};

/// Handle to an object created by a sink.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
pub struct ObjectId(pub u32);

/// Handle to a material created by a sink.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
pub struct MaterialId(pub u32);

/// Error reported by a sink implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkError {
    message: String,
}

impl SinkError {
    /// Wrap a sink-specific message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SinkError {}

/// Surface material description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Material name, usually the element name.
    pub name: String,
    /// RGBA base color.
    pub color: [f32; 4],
}

/// How child objects are replicated over a parent mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Instancing {
    /// Plain mesh, no instancing.
    #[default]
    None,
    /// One child instance per vertex.
    Verts,
    /// One child instance per face, oriented by the face normal.
    Faces,
}

/// Raw mesh data. Faces are quads of vertex indices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeshData {
    /// Object and mesh name.
    pub name: String,
    /// Vertex positions.
    pub vertices: Vec<Vec3>,
    /// Edges as vertex index pairs.
    pub edges: Vec<[u32; 2]>,
    /// Quad faces as vertex index quadruples.
    pub faces: Vec<[u32; 4]>,
}

/// Shape of a built-in primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// NURBS sphere of unit radius.
    NurbsSphere,
    /// UV sphere of unit radius.
    UvSphere {
        /// Segments around the azimuth.
        segments: u32,
        /// Rings from pole to pole.
        rings: u32,
    },
    /// Metaball of unit radius.
    Metaball,
    /// Cylinder along +Z centred on its location.
    Cylinder {
        /// Vertices around the circumference.
        sectors: u32,
        /// Cylinder radius.
        radius: f32,
        /// Cylinder length.
        depth: f32,
    },
}

/// A primitive object to create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    /// Object name.
    pub name: String,
    /// Shape.
    pub kind: PrimitiveKind,
    /// World location.
    pub location: Vec3,
    /// World rotation.
    pub rotation: Quat,
    /// Per-axis scale.
    pub scale: Vec3,
    /// Smooth shading.
    pub smooth: bool,
}

/// Skin-plus-subdivision modifier stack over an edge skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkinModifier {
    /// Skin radius at every vertex.
    pub radius: f32,
    /// Subdivision levels in the viewport.
    pub subdiv_view: u32,
    /// Subdivision levels at render time.
    pub subdiv_render: u32,
}

/// Camera placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Object name.
    pub name: String,
    /// World location.
    pub location: Vec3,
    /// Orientation; the camera looks along its local -Z.
    pub rotation: Quat,
}

/// Point light placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    /// Object name.
    pub name: String,
    /// World location.
    pub location: Vec3,
    /// Light power.
    pub energy: f32,
}

/// Destination of everything an import produces.
///
/// Implementations own the created data; the importer only keeps the
/// returned handles. Errors abort the import and are not rolled back.
pub trait SceneSink {
    /// Register a material.
    fn create_material(
        &mut self,
        material: &Material,
    ) -> Result<MaterialId, SinkError>;

    /// Create a mesh object whose children are replicated per the given
    /// instancing mode.
    fn create_instanced_mesh(
        &mut self,
        mesh: MeshData,
        instancing: Instancing,
    ) -> Result<ObjectId, SinkError>;

    /// Create a plain mesh object.
    fn create_mesh(&mut self, mesh: MeshData) -> Result<ObjectId, SinkError> {
        self.create_instanced_mesh(mesh, Instancing::None)
    }

    /// Create a primitive object.
    fn create_primitive(
        &mut self,
        primitive: &Primitive,
    ) -> Result<ObjectId, SinkError>;

    /// Bind a material to an object.
    fn assign_material(
        &mut self,
        object: ObjectId,
        material: MaterialId,
    ) -> Result<(), SinkError>;

    /// Parent `child` to `parent`.
    fn set_parent(
        &mut self,
        child: ObjectId,
        parent: ObjectId,
    ) -> Result<(), SinkError>;

    /// Attach a skin/subdivision modifier stack to a mesh object.
    fn add_skin(
        &mut self,
        object: ObjectId,
        skin: &SkinModifier,
    ) -> Result<(), SinkError>;

    /// Merge objects into one new object named `name`. The inputs cease to
    /// exist as separate objects.
    fn join(
        &mut self,
        objects: &[ObjectId],
        name: &str,
    ) -> Result<ObjectId, SinkError>;

    /// Create a camera.
    fn create_camera(&mut self, camera: &Camera) -> Result<ObjectId, SinkError>;

    /// Create a light.
    fn create_light(&mut self, light: &Light) -> Result<ObjectId, SinkError>;
}
