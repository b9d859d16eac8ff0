use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::ClipDepth;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Projection", inline)]
#[serde(default)]
/// Clipping planes and depth convention.
pub struct ProjectionOptions {
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub z_near: f32,
    /// Far clipping plane distance.
    #[schemars(title = "Draw Distance", range(min = 10.0, max = 10000.0))]
    pub z_far: f32,
    /// Clip-space depth range of the target graphics API.
    #[schemars(skip)]
    pub depth: ClipDepth,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            z_near: 0.1,
            z_far: 100.0,
            depth: ClipDepth::NegativeOneToOne,
        }
    }
}
