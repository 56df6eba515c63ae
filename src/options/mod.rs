//! Import options with TOML preset support.
//!
//! Every tweakable setting of an import (atom drawing, bond geometry, scene
//! placement) lives here. Options serialize to/from TOML so that presets can
//! be kept next to the structures they are meant for.

mod atoms;
mod scene;
mod sticks;

use std::path::Path;

pub use atoms::{AtomOptions, BallType};
pub use scene::SceneOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use sticks::{StickOptions, StickStyle};

use crate::error::ImportError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[sticks]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct ImportOptions {
    /// Atom drawing options.
    pub atoms: AtomOptions,
    /// Bond reading and geometry options.
    pub sticks: StickOptions,
    /// Scene placement options.
    pub scene: SceneOptions,
}

impl ImportOptions {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(ImportOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ImportError> {
        let content = std::fs::read_to_string(path).map_err(ImportError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| ImportError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ImportError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ImportError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ImportError::Io)?;
        }
        std::fs::write(path, content).map_err(ImportError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Reject values the geometry builders cannot work with.
    pub fn validate(&self) -> Result<(), ImportError> {
        let invalid =
            |msg: &str| Err(ImportError::OptionsParse(msg.to_owned()));
        let atoms = &self.atoms;
        let sticks = &self.sticks;
        if !(atoms.radius_factor.is_finite() && atoms.radius_factor >= 0.0) {
            return invalid("atoms.radius_factor must be a non-negative number");
        }
        if !(atoms.distance_factor.is_finite() && atoms.distance_factor > 0.0) {
            return invalid("atoms.distance_factor must be positive");
        }
        if atoms.ball == BallType::UvSphere
            && (atoms.mesh_azimuth < 3 || atoms.mesh_zenith < 3)
        {
            return invalid(
                "atoms.mesh_azimuth and atoms.mesh_zenith must be at least 3",
            );
        }
        if !(sticks.diameter.is_finite() && sticks.diameter > 0.0) {
            return invalid("sticks.diameter must be positive");
        }
        if !(sticks.unit_length.is_finite() && sticks.unit_length > 0.0) {
            return invalid("sticks.unit_length must be positive");
        }
        if sticks.sectors < 3 {
            return invalid("sticks.sectors must be at least 3");
        }
        if sticks.one_object_nr == 0 {
            return invalid("sticks.one_object_nr must be at least 1");
        }
        Ok(())
    }
}
