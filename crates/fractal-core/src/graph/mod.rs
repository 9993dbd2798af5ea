//! CPU-side surface grapher: a square grid of points tracking an animated
//! parametric function, with timed transitions between functions.
//!
//! The GPU-driven variant reuses the same function library and cycle state;
//! its compute dispatch lives with the host.

pub mod functions;

use glam::Vec3;

use self::functions::{morph, sample, FunctionKind};

/// How the next displayed function is chosen when a transition starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionMode {
    Cycle,
    Random,
}

/// Point-grid grapher. `resolution` points per side, sampled at cell
/// centers across `[-1, 1]^2`.
pub struct Graph {
    resolution: usize,
    /// Seconds a function is shown before a transition starts.
    pub function_duration: f32,
    /// Seconds a transition takes.
    pub transition_duration: f32,
    pub transition_mode: TransitionMode,
    function: FunctionKind,
    transition_from: FunctionKind,
    duration: f32,
    transitioning: bool,
    positions: Vec<Vec3>,
}

impl Graph {
    /// Create a grapher with `resolution` points per side, clamped to
    /// 10..=200 (the CPU grapher's usable range).
    pub fn new(resolution: usize) -> Self {
        let resolution = resolution.clamp(10, 200);
        Self {
            resolution,
            function_duration: 1.0,
            transition_duration: 1.0,
            transition_mode: TransitionMode::Cycle,
            function: FunctionKind::Wave,
            transition_from: FunctionKind::Wave,
            duration: 0.0,
            transitioning: false,
            positions: vec![Vec3::ZERO; resolution * resolution],
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Function currently displayed (the transition target while one is in
    /// progress).
    pub fn function(&self) -> FunctionKind {
        self.function
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Point positions from the latest update, row-major over the grid.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Advance the cycle state machine and rewrite every point.
    ///
    /// `dt` is the frame delta; `time` is the animation clock sampled by
    /// the surface functions.
    pub fn update(&mut self, dt: f32, time: f32) {
        self.duration += dt;
        if self.transitioning {
            if self.duration >= self.transition_duration {
                self.duration -= self.transition_duration;
                self.transitioning = false;
            }
        } else if self.duration >= self.function_duration {
            self.duration -= self.function_duration;
            self.transitioning = true;
            self.transition_from = self.function;
            self.function = match self.transition_mode {
                TransitionMode::Cycle => self.function.next(),
                TransitionMode::Random => self.function.random_other_than(time * 23.7),
            };
        }

        let step = 2.0 / self.resolution as f32;
        let progress = self.duration / self.transition_duration;
        for z in 0..self.resolution {
            let v = (z as f32 + 0.5) * step - 1.0;
            for x in 0..self.resolution {
                let u = (x as f32 + 0.5) * step - 1.0;
                let point = if self.transitioning {
                    morph(u, v, time, self.transition_from, self.function, progress)
                } else {
                    sample(self.function, u, v, time)
                };
                self.positions[z * self.resolution + x] = point;
            }
        }
    }
}
