//! Per-node transform records for the fractal tree.
//!
//! Every non-leaf node has exactly five children. A node's position in its
//! sibling group (its child slot) fixes its offset direction and relative
//! orientation at construction time; the world transform and spin
//! accumulator are rewritten every frame by the level kernel.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

/// Children per non-leaf node; also the size of one sibling group.
pub const CHILD_COUNT: usize = 5;

/// Unit offset directions by child slot: up, right, left, forward, back.
pub const DIRECTIONS: [Vec3; CHILD_COUNT] =
    [Vec3::Y, Vec3::X, Vec3::NEG_X, Vec3::Z, Vec3::NEG_Z];

/// Relative orientation for a child slot.
///
/// Each child leans so its own up axis points along its offset direction.
pub fn child_rotation(slot: usize) -> Quat {
    match slot {
        0 => Quat::IDENTITY,
        1 => Quat::from_rotation_z(-FRAC_PI_2),
        2 => Quat::from_rotation_z(FRAC_PI_2),
        3 => Quat::from_rotation_x(FRAC_PI_2),
        _ => Quat::from_rotation_x(-FRAC_PI_2),
    }
}

/// One element of the fractal hierarchy.
///
/// `direction` and `rotation` are immutable after construction; the world
/// fields and `spin_angle` are frame state. `spin_angle` accumulates
/// without wrapping -- it is only ever fed to trigonometric functions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalPart {
    pub direction: Vec3,
    pub rotation: Quat,
    pub world_position: Vec3,
    pub world_rotation: Quat,
    pub spin_angle: f32,
}

impl FractalPart {
    /// Build a part for `child_index`'s slot in its sibling group, world
    /// state zeroed until the first update.
    pub fn new(child_index: usize) -> Self {
        let slot = child_index % CHILD_COUNT;
        Self {
            direction: DIRECTIONS[slot],
            rotation: child_rotation(slot),
            world_position: Vec3::ZERO,
            world_rotation: Quat::IDENTITY,
            spin_angle: 0.0,
        }
    }
}

/// Index of node `index`'s parent on the previous level.
#[inline]
pub fn parent_index(index: usize) -> usize {
    index / CHILD_COUNT
}

/// Child slot (0..5) of node `index` within its sibling group.
#[inline]
pub fn child_slot(index: usize) -> usize {
    index % CHILD_COUNT
}
