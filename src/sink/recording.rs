//! In-memory [`SceneSink`] used for headless imports and tests.

use serde::Serialize;

use super::{
    Camera, Instancing, Light, Material, MaterialId, MeshData, ObjectId,
    Primitive, SceneSink, SinkError, SkinModifier,
};

/// What a recorded object is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ObjectKind {
    /// Mesh object with its instancing mode.
    Mesh {
        /// Mesh data as handed to the sink.
        mesh: MeshData,
        /// Instancing mode.
        instancing: Instancing,
    },
    /// Primitive object.
    Primitive(Primitive),
    /// Result of a join.
    Joined {
        /// Objects merged into this one.
        parts: Vec<ObjectId>,
    },
    /// Camera.
    Camera(Camera),
    /// Light.
    Light(Light),
}

/// One object as the sink saw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedObject {
    /// Object name.
    pub name: String,
    /// Object payload.
    pub kind: ObjectKind,
    /// Bound material.
    pub material: Option<MaterialId>,
    /// Parent object.
    pub parent: Option<ObjectId>,
    /// Skin modifier stack, if any.
    pub skin: Option<SkinModifier>,
    /// Object this one was merged into, if any.
    pub joined_into: Option<ObjectId>,
}

impl RecordedObject {
    /// Whether the object still exists on its own (was not joined away).
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.joined_into.is_none()
    }

    /// Mesh payload, if this is a mesh object.
    #[must_use]
    pub fn mesh(&self) -> Option<&MeshData> {
        match &self.kind {
            ObjectKind::Mesh { mesh, .. } => Some(mesh),
            _ => None,
        }
    }

    /// Primitive payload, if this is a primitive object.
    #[must_use]
    pub fn primitive(&self) -> Option<&Primitive> {
        match &self.kind {
            ObjectKind::Primitive(p) => Some(p),
            _ => None,
        }
    }
}

/// Sink that records every call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordingSink {
    objects: Vec<RecordedObject>,
    materials: Vec<Material>,
}

impl RecordingSink {
    /// Empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every object ever created, joined ones included.
    #[must_use]
    pub fn objects(&self) -> &[RecordedObject] {
        &self.objects
    }

    /// Objects that were not joined into another one.
    pub fn live_objects(
        &self,
    ) -> impl Iterator<Item = (ObjectId, &RecordedObject)> {
        self.objects
            .iter()
            .enumerate()
            .filter(|(_, o)| o.is_live())
            .map(|(i, o)| (ObjectId(i as u32), o))
    }

    /// Object by handle.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&RecordedObject> {
        self.objects.get(id.0 as usize)
    }

    /// First live object with the given name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<(ObjectId, &RecordedObject)> {
        self.live_objects().find(|(_, o)| o.name == name)
    }

    /// Objects parented to `parent`.
    pub fn children_of(
        &self,
        parent: ObjectId,
    ) -> impl Iterator<Item = (ObjectId, &RecordedObject)> {
        self.objects
            .iter()
            .enumerate()
            .filter(move |(_, o)| o.parent == Some(parent))
            .map(|(i, o)| (ObjectId(i as u32), o))
    }

    /// Every registered material.
    #[must_use]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Material by handle.
    #[must_use]
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0 as usize)
    }

    fn push(&mut self, name: String, kind: ObjectKind) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        self.objects.push(RecordedObject {
            name,
            kind,
            material: None,
            parent: None,
            skin: None,
            joined_into: None,
        });
        id
    }

    fn live_mut(
        &mut self,
        id: ObjectId,
    ) -> Result<&mut RecordedObject, SinkError> {
        match self.objects.get_mut(id.0 as usize) {
            Some(o) if o.is_live() => Ok(o),
            Some(_) => {
                Err(SinkError::new(format!("object {} was joined away", id.0)))
            }
            None => Err(SinkError::new(format!("unknown object {}", id.0))),
        }
    }
}

impl SceneSink for RecordingSink {
    fn create_material(
        &mut self,
        material: &Material,
    ) -> Result<MaterialId, SinkError> {
        let id = MaterialId(self.materials.len() as u32);
        self.materials.push(material.clone());
        Ok(id)
    }

    fn create_instanced_mesh(
        &mut self,
        mesh: MeshData,
        instancing: Instancing,
    ) -> Result<ObjectId, SinkError> {
        let name = mesh.name.clone();
        Ok(self.push(name, ObjectKind::Mesh { mesh, instancing }))
    }

    fn create_primitive(
        &mut self,
        primitive: &Primitive,
    ) -> Result<ObjectId, SinkError> {
        Ok(self.push(
            primitive.name.clone(),
            ObjectKind::Primitive(primitive.clone()),
        ))
    }

    fn assign_material(
        &mut self,
        object: ObjectId,
        material: MaterialId,
    ) -> Result<(), SinkError> {
        if self.material(material).is_none() {
            return Err(SinkError::new(format!(
                "unknown material {}",
                material.0
            )));
        }
        self.live_mut(object)?.material = Some(material);
        Ok(())
    }

    fn set_parent(
        &mut self,
        child: ObjectId,
        parent: ObjectId,
    ) -> Result<(), SinkError> {
        if child == parent {
            return Err(SinkError::new("object cannot parent itself"));
        }
        let _ = self.live_mut(parent)?;
        self.live_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn add_skin(
        &mut self,
        object: ObjectId,
        skin: &SkinModifier,
    ) -> Result<(), SinkError> {
        self.live_mut(object)?.skin = Some(*skin);
        Ok(())
    }

    fn join(
        &mut self,
        objects: &[ObjectId],
        name: &str,
    ) -> Result<ObjectId, SinkError> {
        if objects.is_empty() {
            return Err(SinkError::new("nothing to join"));
        }
        for &part in objects {
            let _ = self.live_mut(part)?;
        }
        let material = self.object(objects[0]).and_then(|o| o.material);
        let joined = self.push(
            name.to_owned(),
            ObjectKind::Joined {
                parts: objects.to_vec(),
            },
        );
        self.objects[joined.0 as usize].material = material;
        for &part in objects {
            self.objects[part.0 as usize].joined_into = Some(joined);
        }
        Ok(joined)
    }

    fn create_camera(
        &mut self,
        camera: &Camera,
    ) -> Result<ObjectId, SinkError> {
        Ok(self.push(camera.name.clone(), ObjectKind::Camera(camera.clone())))
    }

    fn create_light(&mut self, light: &Light) -> Result<ObjectId, SinkError> {
        Ok(self.push(light.name.clone(), ObjectKind::Light(light.clone())))
    }
}
