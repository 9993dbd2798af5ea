//! Flat per-level storage for the fractal tree.
//!
//! Level `l` holds `5^l` parts plus an index-aligned array of packed
//! instance matrices. Everything is allocated together on activation and
//! released together on deactivation; a depth change is a full teardown and
//! rebuild, never an incremental resize.

use bytemuck::Zeroable;

use crate::error::FractalError;
use crate::part::{child_slot, FractalPart, CHILD_COUNT};
use crate::render::InstanceMatrix;

/// Per-level node and matrix arrays.
#[derive(Debug)]
pub struct LevelStore {
    /// `parts[l]` are level `l`'s nodes; node `i` (for `l > 0`) is the
    /// child of `parts[l - 1][i / 5]`.
    pub parts: Vec<Vec<FractalPart>>,
    /// `matrices[l][i]` is the packed transform of `parts[l][i]`,
    /// rewritten every frame.
    pub matrices: Vec<Vec<InstanceMatrix>>,
}

impl LevelStore {
    /// An empty, deactivated store.
    pub fn new() -> Self {
        Self {
            parts: Vec::new(),
            matrices: Vec::new(),
        }
    }

    /// Allocate storage for a `depth`-level tree.
    ///
    /// All-or-nothing: on any failure nothing is kept and the error names
    /// the level that could not be built. Safe to call again after
    /// [`release`](Self::release).
    ///
    /// Sibling groups get child slots 0..5 in order, so every group of five
    /// consecutive nodes covers the full direction/rotation table; the
    /// single root uses slot 0.
    pub fn allocate(depth: usize) -> Result<Self, FractalError> {
        let mut parts = Vec::new();
        let mut matrices = Vec::new();
        let mut len = 1;
        for level in 0..depth {
            parts.push(alloc_parts(level, len)?);
            matrices.push(alloc_matrices(level, len)?);
            len *= CHILD_COUNT;
        }
        Ok(Self { parts, matrices })
    }

    /// Drop every level array. No-op when already empty.
    pub fn release(&mut self) {
        self.parts.clear();
        self.matrices.clear();
    }

    /// Number of allocated levels; 0 when deactivated.
    pub fn depth(&self) -> usize {
        self.parts.len()
    }

    /// Node count of `level` (`5^level`).
    pub fn level_len(&self, level: usize) -> usize {
        self.parts[level].len()
    }

    /// Total node count across all levels.
    pub fn node_count(&self) -> usize {
        self.parts.iter().map(Vec::len).sum()
    }
}

impl Default for LevelStore {
    fn default() -> Self {
        Self::new()
    }
}

fn alloc_parts(level: usize, count: usize) -> Result<Vec<FractalPart>, FractalError> {
    let mut parts = Vec::new();
    parts
        .try_reserve_exact(count)
        .map_err(|_| FractalError::Allocation { level, count })?;
    parts.extend((0..count).map(|i| FractalPart::new(child_slot(i))));
    Ok(parts)
}

fn alloc_matrices(level: usize, count: usize) -> Result<Vec<InstanceMatrix>, FractalError> {
    let mut matrices = Vec::new();
    matrices
        .try_reserve_exact(count)
        .map_err(|_| FractalError::Allocation { level, count })?;
    matrices.resize(count, InstanceMatrix::zeroed());
    Ok(matrices)
}
