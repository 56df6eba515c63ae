//! One import run: parse, bind materials, place, and build geometry.

use std::io::Read;
use std::path::Path;

use glam::Vec3;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::elements::ElementTable;
use crate::error::ImportError;
use crate::geometry::{self, atoms::ElementInstance, rig, sticks};
use crate::options::{ImportOptions, StickStyle};
use crate::pdb::PdbStructure;
use crate::sink::{Material, MaterialId, ObjectId, SceneSink};

/// Summary of a finished import.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportReport {
    /// Real atoms read (chain terminators excluded).
    pub atoms: usize,
    /// Unique sticks read.
    pub sticks: usize,
    /// Repeated `CONECT` pairs that were skipped.
    pub duplicate_sticks: usize,
    /// Centroid of the structure before it was moved.
    pub center: Vec3,
    /// Largest atom distance from the origin after placement.
    pub extent: f32,
    /// Element names in order of first appearance.
    pub elements: Vec<String>,
    /// Point meshes, one per element.
    pub atom_meshes: Vec<ObjectId>,
    /// Top-level stick objects.
    pub stick_objects: Vec<ObjectId>,
    /// Camera, when requested.
    pub camera: Option<ObjectId>,
    /// Light, when requested.
    pub light: Option<ObjectId>,
}

/// Imports PDB files into a [`SceneSink`].
#[derive(Debug, Clone)]
pub struct Importer<'t> {
    table: &'t ElementTable,
    options: ImportOptions,
}

impl<'t> Importer<'t> {
    /// Create an importer resolving elements against `table`.
    pub fn new(
        table: &'t ElementTable,
        options: ImportOptions,
    ) -> Result<Self, ImportError> {
        options.validate()?;
        Ok(Self { table, options })
    }

    /// Options this importer runs with.
    #[must_use]
    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Import the PDB file at `path`.
    pub fn import_path<S: SceneSink + ?Sized>(
        &self,
        path: &Path,
        sink: &mut S,
    ) -> Result<ImportReport, ImportError> {
        log::info!("importing {}", path.display());
        let text = std::fs::read_to_string(path)?;
        self.import_str(&text, sink)
    }

    /// Import PDB text from any reader.
    pub fn import_reader<R: Read, S: SceneSink + ?Sized>(
        &self,
        mut reader: R,
        sink: &mut S,
    ) -> Result<ImportReport, ImportError> {
        let mut text = String::new();
        let _ = reader.read_to_string(&mut text)?;
        self.import_str(&text, sink)
    }

    /// Import PDB text.
    pub fn import_str<S: SceneSink + ?Sized>(
        &self,
        text: &str,
        sink: &mut S,
    ) -> Result<ImportReport, ImportError> {
        let opts = &self.options;
        let mut structure = PdbStructure::parse(
            text,
            self.table,
            opts.atoms.radius_type,
            opts.sticks.enabled,
            opts.sticks.infer_bond_orders,
        )?;
        if structure.atom_count == 0 {
            log::warn!("no ATOM/HETATM records found");
        }

        let elements = self.bind_materials(&mut structure, sink)?;

        let center = geometry::centroid(&structure.atoms);
        if opts.scene.put_to_center {
            let _ = geometry::recentre(&mut structure.atoms);
        }
        geometry::scale_distances(
            &mut structure.atoms,
            opts.atoms.distance_factor,
        );
        let extent = geometry::extent(&structure.atoms);

        let atom_meshes =
            geometry::atoms::build_atoms(sink, &structure.atoms, &opts.atoms)?
                .into_iter()
                .map(|ElementInstance { mesh, .. }| mesh)
                .collect();

        let stick_objects = if opts.sticks.enabled {
            let stick_material = if self.needs_stick_material() {
                Some(self.stick_material(sink)?)
            } else {
                None
            };
            sticks::build_sticks(
                sink,
                &structure.atoms,
                &structure.sticks,
                &opts.sticks,
                stick_material,
            )?
        } else {
            Vec::new()
        };

        let camera = if opts.scene.use_camera {
            Some(sink.create_camera(&rig::camera(extent))?)
        } else {
            None
        };
        let light = if opts.scene.use_light {
            Some(sink.create_light(&rig::light(extent))?)
        } else {
            None
        };

        log::info!(
            "imported {} atoms, {} sticks ({} duplicates), extent {extent:.2}",
            structure.atom_count,
            structure.sticks.len(),
            structure.duplicate_sticks
        );
        Ok(ImportReport {
            atoms: structure.atom_count,
            sticks: structure.sticks.len(),
            duplicate_sticks: structure.duplicate_sticks,
            center,
            extent,
            elements,
            atom_meshes,
            stick_objects,
            camera,
            light,
        })
    }

    /// Create one material per element name and bind it to its atoms.
    /// Returns the element names in order of first appearance.
    fn bind_materials<S: SceneSink + ?Sized>(
        &self,
        structure: &mut PdbStructure,
        sink: &mut S,
    ) -> Result<Vec<String>, ImportError> {
        let mut names = Vec::new();
        let mut by_name: FxHashMap<String, MaterialId> = FxHashMap::default();
        for atom in structure.atoms.iter_mut().filter(|a| !a.is_placeholder()) {
            let material = match by_name.get(&atom.name) {
                Some(&id) => id,
                None => {
                    let id = sink.create_material(&Material {
                        name: atom.name.clone(),
                        color: atom.color,
                    })?;
                    let _ = by_name.insert(atom.name.clone(), id);
                    names.push(atom.name.clone());
                    id
                }
            };
            atom.material = Some(material);
        }
        Ok(names)
    }

    fn needs_stick_material(&self) -> bool {
        let sticks = &self.options.sticks;
        sticks.style == StickStyle::Skin || !sticks.color
    }

    fn stick_material<S: SceneSink + ?Sized>(
        &self,
        sink: &mut S,
    ) -> Result<MaterialId, ImportError> {
        let stick = self.table.stick();
        Ok(sink.create_material(&Material {
            name: stick.name.clone(),
            color: stick.color,
        })?)
    }
}
