//! Parametric surface functions for the grapher demos.
//!
//! Each function maps grid coordinates `(u, v)` in `[-1, 1]` and an
//! animation time in seconds to a point on a moving surface.

use std::f32::consts::PI;

use glam::Vec3;

use crate::math::{hash11, smoothstep};

/// Selectable surface function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunctionKind {
    Wave,
    MultiWave,
    Ripple,
    Sphere,
    Torus,
}

impl FunctionKind {
    /// All functions, in display order.
    pub const ALL: [FunctionKind; 5] = [
        FunctionKind::Wave,
        FunctionKind::MultiWave,
        FunctionKind::Ripple,
        FunctionKind::Sphere,
        FunctionKind::Torus,
    ];

    /// Next function in the cycle, wrapping at the end.
    pub fn next(self) -> Self {
        match self {
            FunctionKind::Wave => FunctionKind::MultiWave,
            FunctionKind::MultiWave => FunctionKind::Ripple,
            FunctionKind::Ripple => FunctionKind::Sphere,
            FunctionKind::Sphere => FunctionKind::Torus,
            FunctionKind::Torus => FunctionKind::Wave,
        }
    }

    /// Pseudo-random pick guaranteed different from `self`. `seed` is
    /// hashed, so any varying scalar works.
    ///
    /// Picks from slots 1.. and falls back to slot 0 on collision, so every
    /// outcome is reachable.
    pub fn random_other_than(self, seed: f32) -> Self {
        let span = (Self::ALL.len() - 1) as f32;
        let pick = 1 + (hash11(seed) * span) as usize;
        let choice = Self::ALL[pick.min(Self::ALL.len() - 1)];
        if choice == self {
            Self::ALL[0]
        } else {
            choice
        }
    }
}

/// Evaluate `kind` at grid coordinates `(u, v)` and time `t`.
pub fn sample(kind: FunctionKind, u: f32, v: f32, t: f32) -> Vec3 {
    match kind {
        FunctionKind::Wave => wave(u, v, t),
        FunctionKind::MultiWave => multi_wave(u, v, t),
        FunctionKind::Ripple => ripple(u, v, t),
        FunctionKind::Sphere => sphere(u, v, t),
        FunctionKind::Torus => torus(u, v, t),
    }
}

/// Blend two functions; `progress` in [0, 1] is smoothed before the lerp.
pub fn morph(u: f32, v: f32, t: f32, from: FunctionKind, to: FunctionKind, progress: f32) -> Vec3 {
    let blend = smoothstep(0.0, 1.0, progress);
    sample(from, u, v, t).lerp(sample(to, u, v, t), blend)
}

/// Sine wave traveling diagonally across the grid.
pub fn wave(u: f32, v: f32, t: f32) -> Vec3 {
    Vec3::new(u, (PI * (u + v + t)).sin(), v)
}

/// Sum of three waves with different periods and speeds.
pub fn multi_wave(u: f32, v: f32, t: f32) -> Vec3 {
    let mut y = (PI * (u + 0.5 * t)).sin();
    y += 0.5 * (2.0 * PI * (v + t)).sin();
    y += (PI * (u + v + 0.25 * t)).sin();
    Vec3::new(u, y * (1.0 / 2.5), v)
}

/// Concentric ripple spreading from the grid center, fading with distance.
pub fn ripple(u: f32, v: f32, t: f32) -> Vec3 {
    let d = (u * u + v * v).sqrt();
    let y = (PI * (4.0 * d - t)).sin();
    Vec3::new(u, y / (1.0 + 10.0 * d), v)
}

/// Sphere with twisting surface bands.
pub fn sphere(u: f32, v: f32, t: f32) -> Vec3 {
    let r = 0.9 + 0.1 * (PI * (6.0 * u + 4.0 * v + t)).sin();
    let s = r * (0.5 * PI * v).cos();
    Vec3::new(s * (PI * u).sin(), r * (0.5 * PI * v).sin(), s * (PI * u).cos())
}

/// Self-intersecting torus with twisting ring and tube radii.
pub fn torus(u: f32, v: f32, t: f32) -> Vec3 {
    let r1 = 0.7 + 0.1 * (PI * (6.0 * u + 0.5 * t)).sin();
    let r2 = 0.15 + 0.05 * (PI * (8.0 * u + 4.0 * v + 2.0 * t)).sin();
    let s = r1 + r2 * (PI * v).cos();
    Vec3::new(s * (PI * u).sin(), r2 * (PI * v).sin(), s * (PI * u).cos())
}
