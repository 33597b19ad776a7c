//! Actor pose and the interpolation helpers the drink phases use.

use glam::{EulerRot, Quat, Vec3};

/// World-space position + orientation of the hand/glass actor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Pose {
    #[must_use]
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Build from pitch/yaw/roll in degrees (yaw applied last, roll first).
    #[must_use]
    pub fn from_euler_deg(position: Vec3, pitch_deg: f32, yaw_deg: f32, roll_deg: f32) -> Self {
        Self {
            position,
            rotation: Quat::from_euler(
                EulerRot::YXZ,
                yaw_deg.to_radians(),
                pitch_deg.to_radians(),
                roll_deg.to_radians(),
            ),
        }
    }

    /// Yaw and roll (radians) of the current orientation.
    #[must_use]
    pub fn yaw_roll(&self) -> (f32, f32) {
        let (yaw, _pitch, roll) = self.rotation.to_euler(EulerRot::YXZ);
        (yaw, roll)
    }

    /// Linear position, spherical rotation. `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(&self, to: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            position: self.position.lerp(to.position, t),
            rotation: self.rotation.slerp(to.rotation, t),
        }
    }

    /// Component-wise comparison within `eps`; `q` and `-q` count as equal.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, eps: f32) -> bool {
        let (r, o) = (self.rotation, other.rotation);
        self.position.abs_diff_eq(other.position, eps)
            && (r.abs_diff_eq(o, eps) || r.abs_diff_eq(-o, eps))
    }
}

/// Normalized progress of `elapsed` through `duration`, clamped to `[0, 1]`.
/// Durations below `min_duration` are treated as `min_duration`.
#[must_use]
pub fn progress(elapsed: f32, duration: f32, min_duration: f32) -> f32 {
    (elapsed / duration.max(min_duration)).clamp(0.0, 1.0)
}

#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
