//! GPU-facing side of the fractal: the packed per-instance transform, the
//! culling bounds, and the bridge that feeds a host renderer one structured
//! buffer and one instanced draw per level.

use glam::{Mat3, Quat, Vec3};

use crate::error::FractalError;
use crate::level::LevelStore;

/// Opaque host handle to a mesh asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeshHandle(pub u32);

/// Opaque host handle to a material asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaterialHandle(pub u32);

/// GPU instance transform: three scaled rotation basis columns plus the
/// world translation. 48 bytes, matches a 3x4 float structured buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceMatrix {
    pub c0: [f32; 3], // 12 bytes, rotation X basis * scale
    pub c1: [f32; 3], // 12 bytes, rotation Y basis * scale
    pub c2: [f32; 3], // 12 bytes, rotation Z basis * scale
    pub c3: [f32; 3], // 12 bytes, world translation
}

/// Structured-buffer element stride in bytes (3x4 f32).
pub const INSTANCE_STRIDE: usize = std::mem::size_of::<InstanceMatrix>();

impl InstanceMatrix {
    /// Pack a world rotation and position, scaling the basis columns by
    /// `scale`. The translation column is not scaled.
    pub fn pack(rotation: Quat, position: Vec3, scale: f32) -> Self {
        let r = Mat3::from_quat(rotation) * scale;
        Self {
            c0: r.x_axis.to_array(),
            c1: r.y_axis.to_array(),
            c2: r.z_axis.to_array(),
            c3: position.to_array(),
        }
    }

    /// World translation column.
    pub fn translation(&self) -> Vec3 {
        Vec3::from_array(self.c3)
    }
}

/// Axis-aligned culling volume: center plus half-extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub center: Vec3,
    pub extents: Vec3,
}

impl Bounds {
    /// Build from a full box size.
    pub fn from_size(center: Vec3, size: Vec3) -> Self {
        Self {
            center,
            extents: size * 0.5,
        }
    }
}

/// Host GPU services the bridge drives.
///
/// Buffers are fixed-capacity structured buffers with the
/// [`INSTANCE_STRIDE`] element stride; they release their device resources
/// on drop.
pub trait RenderBackend {
    type Buffer;

    /// Create a buffer holding exactly `capacity` instance matrices, or
    /// `None` when the device cannot provide one.
    fn create_buffer(&mut self, capacity: usize) -> Option<Self::Buffer>;

    /// Overwrite the entire buffer. `data.len()` always equals the capacity
    /// the buffer was created with; there are no partial updates.
    fn upload(&mut self, buffer: &mut Self::Buffer, data: &[InstanceMatrix]);

    /// Draw `instances` copies of `mesh` with `material`, sourcing
    /// per-instance transforms from `buffer`, culled against `bounds`.
    fn draw_instanced(
        &mut self,
        mesh: MeshHandle,
        material: MaterialHandle,
        buffer: &Self::Buffer,
        instances: usize,
        bounds: Bounds,
    );
}

/// Per-level instance buffers plus the draw loop that submits them.
///
/// Each bridge owns its buffers outright; nothing is shared between
/// instances or reached through process-wide state.
#[derive(Debug)]
pub struct InstanceBridge<B: RenderBackend> {
    mesh: MeshHandle,
    material: MaterialHandle,
    buffers: Vec<B::Buffer>,
}

impl<B: RenderBackend> InstanceBridge<B> {
    /// Create one buffer per level, each sized exactly to the level's node
    /// count. All-or-nothing: on failure every buffer created so far is
    /// dropped and the error names the level that could not be built.
    pub fn allocate(
        backend: &mut B,
        store: &LevelStore,
        mesh: MeshHandle,
        material: MaterialHandle,
    ) -> Result<Self, FractalError> {
        let mut buffers = Vec::with_capacity(store.depth());
        for level in 0..store.depth() {
            let count = store.level_len(level);
            match backend.create_buffer(count) {
                Some(buffer) => buffers.push(buffer),
                None => return Err(FractalError::Allocation { level, count }),
            }
        }
        Ok(Self {
            mesh,
            material,
            buffers,
        })
    }

    /// Number of per-level buffers; equals the depth of the store this
    /// bridge was allocated against.
    pub fn level_count(&self) -> usize {
        self.buffers.len()
    }

    /// Upload every level's matrices in full and issue one instanced draw
    /// per level. Call only after the frame's `step` has returned, so the
    /// matrices read here are the ones the final level committed.
    pub fn draw(&mut self, backend: &mut B, store: &LevelStore, bounds: Bounds) {
        debug_assert_eq!(
            self.buffers.len(),
            store.depth(),
            "bridge and store were sized for different depths"
        );
        for (level, buffer) in self.buffers.iter_mut().enumerate() {
            let matrices = &store.matrices[level];
            backend.upload(buffer, matrices);
            backend.draw_instanced(self.mesh, self.material, buffer, matrices.len(), bounds);
        }
    }

    /// Drop all buffers, releasing their device resources. Safe to call
    /// when already empty.
    pub fn release(&mut self) {
        self.buffers.clear();
    }
}
