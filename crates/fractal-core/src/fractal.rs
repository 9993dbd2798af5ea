//! Frame scheduler for the fractal hierarchy.

use glam::{Quat, Vec3};

use crate::config::FractalConfig;
use crate::error::FractalError;
use crate::kernel::update_level;
use crate::level::LevelStore;
use crate::render::{Bounds, InstanceMatrix};

/// Host-owned transform driving the root node, read once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectTransform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl ObjectTransform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };
}

/// One fractal instance: configuration, per-level storage, and the
/// per-frame scheduler that advances it.
///
/// Levels update strictly in parent-to-child order. Within a level the
/// kernel runs as independent batches; each level's dispatch starts only
/// after the previous level's dispatch has fully completed, and
/// [`step`](Self::step) returns only after the deepest level commits, so
/// every level is consistent when it does.
#[derive(Debug)]
pub struct Fractal {
    config: FractalConfig,
    store: LevelStore,
}

impl Fractal {
    /// Validate `config` and create a deactivated system with no storage.
    pub fn new(config: FractalConfig) -> Result<Self, FractalError> {
        config.validate()?;
        Ok(Self {
            config,
            store: LevelStore::new(),
        })
    }

    /// Allocate all per-level storage. No-op when already active. On
    /// failure nothing is kept and the system stays deactivated.
    pub fn enable(&mut self) -> Result<(), FractalError> {
        if self.store.depth() == 0 {
            self.store = LevelStore::allocate(self.config.depth)?;
        }
        Ok(())
    }

    /// Release all storage. Safe to call when already deactivated.
    pub fn disable(&mut self) {
        self.store.release();
    }

    pub fn is_enabled(&self) -> bool {
        self.store.depth() > 0
    }

    pub fn config(&self) -> &FractalConfig {
        &self.config
    }

    pub fn store(&self) -> &LevelStore {
        &self.store
    }

    /// Change the tree depth, rebuilding all storage when active.
    ///
    /// The rebuild is a full teardown plus reallocation; no frame state
    /// survives it. On allocation failure the system is left deactivated.
    /// Taking `&mut self` already rules out a rebuild while a step is in
    /// flight.
    pub fn set_depth(&mut self, depth: usize) -> Result<(), FractalError> {
        let config = FractalConfig {
            depth,
            ..self.config
        };
        config.validate()?;
        self.config = config;
        if self.is_enabled() {
            self.disable();
            self.enable()?;
        }
        Ok(())
    }

    /// Base angular spin rate in radians per second.
    pub fn set_spin_rate(&mut self, spin_rate: f32) {
        self.config.spin_rate = spin_rate;
    }

    /// Advance the whole hierarchy by one frame.
    ///
    /// The root takes the host `object` transform directly; every deeper
    /// level is dispatched in order behind the previous level's completion
    /// barrier, at a scale that halves per level. Stepping a deactivated
    /// system does nothing.
    pub fn step(&mut self, dt: f32, object: ObjectTransform, object_scale: f32) {
        let depth = self.store.depth();
        if depth == 0 {
            return;
        }

        let spin_angle_delta = self.config.spin_rate * dt;

        // Root level: driven by the host transform, not by the kernel.
        let mut root = self.store.parts[0][0];
        root.spin_angle += spin_angle_delta;
        root.world_rotation =
            object.rotation * root.rotation * Quat::from_rotation_y(root.spin_angle);
        root.world_position = object.position;
        self.store.parts[0][0] = root;
        self.store.matrices[0][0] =
            InstanceMatrix::pack(root.world_rotation, root.world_position, object_scale);

        let mut scale = object_scale;
        for level in 1..depth {
            scale *= 0.5;
            let (done, pending) = self.store.parts.split_at_mut(level);
            update_level(
                &done[level - 1],
                &mut pending[0],
                &mut self.store.matrices[level],
                spin_angle_delta,
                scale,
            );
        }
    }

    /// Culling volume for the current frame: a box of full size
    /// `3 * object_scale` centered on the root's world position.
    pub fn bounds(&self, object_scale: f32) -> Bounds {
        let center = if self.is_enabled() {
            self.store.parts[0][0].world_position
        } else {
            Vec3::ZERO
        };
        Bounds::from_size(center, Vec3::splat(3.0 * object_scale))
    }
}
