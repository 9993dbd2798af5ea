//! Per-level batch update for the fractal hierarchy.
//!
//! Each node derives its world transform from its parent's state exactly as
//! the previous level's dispatch committed it, and writes nothing but its
//! own slots, so invocation order within a level cannot change the result.
//! Degenerate inputs (NaN/Inf world transforms) are neither detected nor
//! corrected here; they propagate through the arithmetic unchanged.

use glam::Quat;

use crate::part::{FractalPart, CHILD_COUNT};
use crate::render::InstanceMatrix;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Offset of a child from its parent, in multiples of the child's scale.
pub const OFFSET_FACTOR: f32 = 1.5;

/// Nodes per parallel work unit: one sibling group sharing a parent.
pub const BATCH_SIZE: usize = CHILD_COUNT;

/// Advance one node from its parent's committed state.
///
/// Accumulates the node's spin, rewrites its world transform in place, and
/// returns the packed instance matrix for its slot.
#[inline]
pub fn update_part(
    parent: &FractalPart,
    part: &mut FractalPart,
    spin_angle_delta: f32,
    scale: f32,
) -> InstanceMatrix {
    part.spin_angle += spin_angle_delta;
    part.world_rotation =
        parent.world_rotation * part.rotation * Quat::from_rotation_y(part.spin_angle);
    part.world_position =
        parent.world_position + parent.world_rotation * (OFFSET_FACTOR * scale * part.direction);
    InstanceMatrix::pack(part.world_rotation, part.world_position, scale)
}

/// Update one whole level against its already-finalized parent level.
///
/// Work is split into sibling-group batches of [`BATCH_SIZE`]; with the
/// `parallel` feature the batches run on the rayon pool and the call
/// returns only once every batch has finished. That join is the completion
/// barrier the next level's dispatch depends on.
pub fn update_level(
    parents: &[FractalPart],
    parts: &mut [FractalPart],
    matrices: &mut [InstanceMatrix],
    spin_angle_delta: f32,
    scale: f32,
) {
    debug_assert_eq!(parts.len(), matrices.len());
    debug_assert_eq!(parts.len(), parents.len() * CHILD_COUNT);

    #[cfg(feature = "parallel")]
    {
        parts
            .par_chunks_mut(BATCH_SIZE)
            .zip(matrices.par_chunks_mut(BATCH_SIZE))
            .enumerate()
            .for_each(|(group, (part_batch, matrix_batch))| {
                // All five siblings in a batch share the same parent.
                let parent = &parents[group];
                for (part, matrix) in part_batch.iter_mut().zip(matrix_batch) {
                    *matrix = update_part(parent, part, spin_angle_delta, scale);
                }
            });
    }

    #[cfg(not(feature = "parallel"))]
    {
        for group in 0..parents.len() {
            let parent = &parents[group];
            let base = group * BATCH_SIZE;
            for i in base..base + BATCH_SIZE {
                matrices[i] = update_part(parent, &mut parts[i], spin_angle_delta, scale);
            }
        }
    }
}
