use cgmath::Vector3;

use super::catalog::Footprint;
use super::name_parser::TargetFootprint;

/// Horizontal scale factors that stretch an asset onto a target footprint
///
/// Only X and Z are ever computed; vertical scale is left to the asset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FootprintScale {
    pub x: f32,
    pub z: f32,
}

impl FootprintScale {
    /// Replaces X and Z of `current`, keeping its Y
    pub fn apply(&self, current: Vector3<f32>) -> Vector3<f32> {
        Vector3::new(self.x, current.y, self.z)
    }
}

/// Width maps onto X, length onto Z
pub fn compute_scale(target: TargetFootprint, original: Footprint) -> FootprintScale {
    FootprintScale {
        x: target.width / original.width,
        z: target.length / original.depth,
    }
}
