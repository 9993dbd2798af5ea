use std::f32::consts::PI;

use crate::error::FractalError;
use crate::render::{MaterialHandle, MeshHandle};

/// Smallest usable tree depth: a single root level.
pub const MIN_DEPTH: usize = 1;
/// Deepest supported tree. Level sizes grow five-fold per level, so depth 8
/// already means 97_656 nodes.
pub const MAX_DEPTH: usize = 8;

/// Configuration for one fractal instance. All state is rebuilt from this
/// on activation; nothing is persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalConfig {
    /// Number of tree levels. Changing it requires a full storage rebuild.
    pub depth: usize,
    /// Base angular spin rate in radians per second.
    pub spin_rate: f32,
    /// Mesh drawn for every node instance.
    pub mesh: MeshHandle,
    /// Material shared by every instance.
    pub material: MaterialHandle,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            spin_rate: 0.125 * PI,
            mesh: MeshHandle(0),
            material: MaterialHandle(0),
        }
    }
}

impl FractalConfig {
    /// Reject an out-of-range depth before any storage is touched.
    pub fn validate(&self) -> Result<(), FractalError> {
        if self.depth < MIN_DEPTH || self.depth > MAX_DEPTH {
            return Err(FractalError::InvalidDepth { depth: self.depth });
        }
        Ok(())
    }
}
