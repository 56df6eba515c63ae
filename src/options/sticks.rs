use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Bond geometry mode.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum StickStyle {
    /// Short cylinder segments instanced over the faces of anchor meshes.
    Dupliverts,
    /// One edge skeleton wrapped by a skin modifier.
    #[default]
    Skin,
    /// One explicit cylinder per bond.
    Cylinders,
}

/// Bond reading and geometry parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Sticks", inline)]
#[serde(default)]
pub struct StickOptions {
    /// Read `CONECT` records and draw bonds.
    #[schemars(title = "Sticks")]
    pub enabled: bool,
    /// Geometry mode.
    #[schemars(title = "Style")]
    pub style: StickStyle,
    /// Cylinder vertices around the circumference.
    #[schemars(title = "Sectors", range(min = 3, max = 64))]
    pub sectors: u32,
    /// Stick radius.
    #[schemars(title = "Diameter", range(min = 0.001, max = 5.0), extend("step" = 0.01))]
    pub diameter: f32,
    /// Segment length in segmented mode.
    #[schemars(title = "Unit Length", range(min = 0.001, max = 2.0), extend("step" = 0.005))]
    pub unit_length: f32,
    /// Spacing of double/triple bond cylinders, in stick diameters.
    #[schemars(title = "Bond Spacing", range(min = 0.0, max = 10.0), extend("step" = 0.05))]
    pub dist: f32,
    /// Smooth shading on cylinders.
    #[schemars(title = "Smooth")]
    pub smooth: bool,
    /// Color each half of a bond like its atom instead of one stick color.
    #[schemars(title = "Color By Element")]
    pub color: bool,
    /// Infer double/triple bonds from repeated `CONECT` partners.
    #[schemars(title = "Bond Orders")]
    pub infer_bond_orders: bool,
    /// Join cylinders into one object.
    #[schemars(title = "One Object")]
    pub one_object: bool,
    /// Cylinders per intermediate join batch.
    #[schemars(title = "Batch Size", range(min = 1, max = 100_000))]
    pub one_object_nr: usize,
    /// Skin subdivision levels in the viewport.
    #[schemars(title = "Subdivision (View)", range(min = 0, max = 6))]
    pub subdiv_view: u32,
    /// Skin subdivision levels at render time.
    #[schemars(title = "Subdivision (Render)", range(min = 0, max = 6))]
    pub subdiv_render: u32,
}

impl StickOptions {
    /// Perpendicular distance between neighbouring cylinders of a multiple
    /// bond.
    #[must_use]
    pub fn repeat_spacing(&self) -> f32 {
        self.diameter * self.dist
    }
}

impl Default for StickOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            style: StickStyle::Skin,
            sectors: 20,
            diameter: 0.2,
            unit_length: 0.05,
            dist: 1.1,
            smooth: true,
            color: true,
            infer_bond_orders: false,
            one_object: true,
            one_object_nr: 200,
            subdiv_view: 2,
            subdiv_render: 2,
        }
    }
}
