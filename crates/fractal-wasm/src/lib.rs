//! Browser bridge for the visualization demos.
//!
//! Matrix and point storage stays on the Rust side; the JS/WebGPU host
//! reads each array through a raw pointer plus byte length and copies it
//! into its own GPU buffers once per frame, after `step` has returned.

use wasm_bindgen::prelude::*;

use fractal_core::config::FractalConfig;
use fractal_core::fractal::{Fractal, ObjectTransform};
use fractal_core::graph::{Graph, TransitionMode};
use fractal_core::movement::MovingSphere;
use fractal_core::render::INSTANCE_STRIDE;
use glam::{Quat, Vec2, Vec3};

/// Instanced fractal world. One structured buffer per level on the host
/// side; `level_matrices_ptr`/`level_matrices_byte_length` describe the
/// exact region to upload for each.
#[wasm_bindgen]
pub struct FractalWorld {
    fractal: Fractal,
}

#[wasm_bindgen]
impl FractalWorld {
    /// Create and activate a fractal of the given depth (1..=8).
    #[wasm_bindgen(constructor)]
    pub fn new(depth: usize) -> Result<FractalWorld, JsError> {
        let config = FractalConfig {
            depth,
            ..FractalConfig::default()
        };
        let mut fractal = Fractal::new(config).map_err(|e| JsError::new(&e.to_string()))?;
        fractal.enable().map_err(|e| JsError::new(&e.to_string()))?;

        web_sys::console::log_1(
            &format!(
                "WASM FractalWorld created: depth {} ({} nodes)",
                depth,
                fractal.store().node_count()
            )
            .into(),
        );

        Ok(FractalWorld { fractal })
    }

    /// Advance one frame from the host object transform. Returns elapsed
    /// milliseconds.
    #[allow(clippy::too_many_arguments)]
    #[wasm_bindgen]
    pub fn step(
        &mut self,
        dt: f32,
        px: f32,
        py: f32,
        pz: f32,
        qx: f32,
        qy: f32,
        qz: f32,
        qw: f32,
        object_scale: f32,
    ) -> f32 {
        let start = js_sys::Date::now();
        let object = ObjectTransform {
            position: Vec3::new(px, py, pz),
            rotation: Quat::from_xyzw(qx, qy, qz, qw),
        };
        self.fractal.step(dt, object, object_scale);
        (js_sys::Date::now() - start) as f32
    }

    #[wasm_bindgen]
    pub fn level_count(&self) -> usize {
        self.fractal.store().depth()
    }

    #[wasm_bindgen]
    pub fn level_instance_count(&self, level: usize) -> usize {
        self.fractal.store().level_len(level)
    }

    /// Pointer to `level`'s packed matrices, 48 bytes per instance.
    #[wasm_bindgen]
    pub fn level_matrices_ptr(&self, level: usize) -> *const f32 {
        bytemuck::cast_slice::<_, f32>(self.fractal.store().matrices[level].as_slice()).as_ptr()
    }

    #[wasm_bindgen]
    pub fn level_matrices_byte_length(&self, level: usize) -> usize {
        self.fractal.store().matrices[level].len() * INSTANCE_STRIDE
    }

    /// Culling bounds as `[center xyz, half-extents xyz]`.
    #[wasm_bindgen]
    pub fn bounds(&self, object_scale: f32) -> Vec<f32> {
        let b = self.fractal.bounds(object_scale);
        vec![
            b.center.x, b.center.y, b.center.z, b.extents.x, b.extents.y, b.extents.z,
        ]
    }

    /// Rebuild the tree at a new depth (full teardown and reallocation).
    #[wasm_bindgen]
    pub fn set_depth(&mut self, depth: usize) -> Result<(), JsError> {
        self.fractal
            .set_depth(depth)
            .map_err(|e| JsError::new(&e.to_string()))?;
        web_sys::console::log_1(&format!("WASM FractalWorld rebuilt: depth {depth}").into());
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_spin_rate(&mut self, spin_rate: f32) {
        self.fractal.set_spin_rate(spin_rate);
    }
}

/// Surface grapher demo; the host reads the point grid back each frame.
#[wasm_bindgen]
pub struct GraphWorld {
    graph: Graph,
}

#[wasm_bindgen]
impl GraphWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(resolution: usize) -> GraphWorld {
        GraphWorld {
            graph: Graph::new(resolution),
        }
    }

    #[wasm_bindgen]
    pub fn step(&mut self, dt: f32, time: f32) {
        self.graph.update(dt, time);
    }

    #[wasm_bindgen]
    pub fn resolution(&self) -> usize {
        self.graph.resolution()
    }

    #[wasm_bindgen]
    pub fn point_count(&self) -> usize {
        self.graph.positions().len()
    }

    /// Pointer to the point grid, 12 bytes per point.
    #[wasm_bindgen]
    pub fn positions_ptr(&self) -> *const f32 {
        bytemuck::cast_slice::<_, f32>(self.graph.positions()).as_ptr()
    }

    #[wasm_bindgen]
    pub fn positions_byte_length(&self) -> usize {
        self.graph.positions().len() * std::mem::size_of::<Vec3>()
    }

    #[wasm_bindgen]
    pub fn set_random_transitions(&mut self, random: bool) {
        self.graph.transition_mode = if random {
            TransitionMode::Random
        } else {
            TransitionMode::Cycle
        };
    }

    #[wasm_bindgen]
    pub fn set_durations(&mut self, function_duration: f32, transition_duration: f32) {
        self.graph.function_duration = function_duration;
        self.graph.transition_duration = transition_duration;
    }
}

/// Kinematic sphere demo driven by host-polled input.
#[wasm_bindgen]
pub struct SphereWorld {
    sphere: MovingSphere,
}

#[wasm_bindgen]
impl SphereWorld {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SphereWorld {
        SphereWorld {
            sphere: MovingSphere::default(),
        }
    }

    #[wasm_bindgen]
    pub fn step(&mut self, input_x: f32, input_y: f32, dt: f32) {
        self.sphere.update(Vec2::new(input_x, input_y), dt);
    }

    #[wasm_bindgen]
    pub fn x(&self) -> f32 {
        self.sphere.position().x
    }

    #[wasm_bindgen]
    pub fn y(&self) -> f32 {
        self.sphere.position().y
    }

    #[wasm_bindgen]
    pub fn z(&self) -> f32 {
        self.sphere.position().z
    }

    #[wasm_bindgen]
    pub fn set_bounciness(&mut self, bounciness: f32) {
        self.sphere.bounciness = bounciness.clamp(0.0, 1.0);
    }

    #[wasm_bindgen]
    pub fn set_max_speed(&mut self, max_speed: f32) {
        self.sphere.max_speed = max_speed;
    }
}

impl Default for SphereWorld {
    fn default() -> Self {
        Self::new()
    }
}
