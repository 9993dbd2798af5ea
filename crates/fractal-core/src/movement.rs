//! Physics-free sphere controller: velocity steering inside an allowed
//! area. Input polling stays with the host; this consumes an
//! already-polled 2D input vector.

use glam::{Vec2, Vec3};

use crate::math::move_towards;

/// Axis-aligned area on the XZ plane the sphere may occupy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }
}

/// Kinematic sphere steered by a 2D input vector.
///
/// Velocity moves toward the input-desired velocity under an acceleration
/// limit; the position is clamped to `allowed_area`, reflecting the
/// offending velocity component scaled by `-bounciness` on contact.
pub struct MovingSphere {
    /// Fraction of velocity kept after hitting an area edge, 0..=1.
    pub bounciness: f32,
    /// Top speed in units per second.
    pub max_speed: f32,
    /// Acceleration limit in units per second squared.
    pub max_acceleration: f32,
    /// Allowed XZ area.
    pub allowed_area: Rect,
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Default for MovingSphere {
    fn default() -> Self {
        Self {
            bounciness: 0.5,
            max_speed: 10.0,
            max_acceleration: 10.0,
            allowed_area: Rect::new(Vec2::splat(-5.0), Vec2::splat(5.0)),
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
        }
    }
}

impl MovingSphere {
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Advance one frame.
    ///
    /// Input magnitude is clamped to 1 so diagonal input is no faster than
    /// axis-aligned input.
    pub fn update(&mut self, input: Vec2, dt: f32) {
        let input = input.clamp_length_max(1.0);
        let desired = Vec3::new(input.x, 0.0, input.y) * self.max_speed;
        let max_speed_change = self.max_acceleration * dt;

        self.velocity.x = move_towards(self.velocity.x, desired.x, max_speed_change);
        self.velocity.z = move_towards(self.velocity.z, desired.z, max_speed_change);

        let mut position = self.position + self.velocity * dt;

        let area = self.allowed_area;
        if position.x < area.min.x {
            position.x = area.min.x;
            self.velocity.x *= -self.bounciness;
        } else if position.x > area.max.x {
            position.x = area.max.x;
            self.velocity.x *= -self.bounciness;
        }
        if position.z < area.min.y {
            position.z = area.min.y;
            self.velocity.z *= -self.bounciness;
        } else if position.z > area.max.y {
            position.z = area.max.y;
            self.velocity.z *= -self.bounciness;
        }

        self.position = position;
    }
}
