//! Tunable parameters for the drink rig and their validation.

use data_runtime::configs::drink::DrinkCfg;
use glam::Vec3;
use thiserror::Error;

use crate::liquid::FillRange;
use crate::pose::{Pose, lerp};

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("fill range is inverted (min {min} > max {max})")]
    InvertedRange { min: f32, max: f32 },
    #[error("{field} must be >= 0 (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("{0} is not a finite number")]
    NonFinite(&'static str),
}

/// Scene placement: where the hand rests and where the glass gets lifted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigGeometry {
    pub rest: Pose,
    pub target_position: Vec3,
    /// Height the glass reaches when fully tilted.
    pub max_height: f32,
    /// Pitch when lifting a full glass.
    pub rest_tilt_deg: f32,
    /// Pitch when the glass is drained.
    pub max_tilt_deg: f32,
}

impl Default for RigGeometry {
    fn default() -> Self {
        Self {
            rest: Pose::from_euler_deg(Vec3::new(0.32, -0.45, 0.55), 0.0, 0.0, 0.0),
            target_position: Vec3::new(0.05, -0.12, 0.28),
            max_height: 0.04,
            rest_tilt_deg: -5.0,
            max_tilt_deg: 80.0,
        }
    }
}

impl RigGeometry {
    /// Pose at the mouth for a glass whose normalized fill is `f`: higher and
    /// steeper the emptier it gets. Yaw and roll come from the live actor.
    #[must_use]
    pub fn tilt_pose(&self, f: f32, yaw: f32, roll: f32) -> Pose {
        let f = f.clamp(0.0, 1.0);
        let t = self.target_position;
        let position = Vec3::new(t.x, lerp(t.y, self.max_height, f), t.z);
        let pitch = lerp(self.rest_tilt_deg, self.max_tilt_deg, f).to_radians();
        Pose::new(
            position,
            glam::Quat::from_euler(glam::EulerRot::YXZ, yaw, pitch, roll),
        )
    }

    /// Distance the hand travels back from the fully tilted pose; return
    /// durations scale against it.
    #[must_use]
    pub fn reference_distance(&self) -> f32 {
        let t = self.target_position;
        Vec3::new(t.x, self.max_height, t.z).distance(self.rest.position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrinkParams {
    pub range: FillRange,
    /// Seconds for the hand to reach the glass before drinking starts.
    pub approach_s: f32,
    /// Seconds to drink one unit of fill.
    pub drink_s_per_unit: f32,
    /// Seconds to return from the fully tilted pose; shorter trips scale down.
    pub return_s: f32,
    /// Cosmetic fill dip during the approach.
    pub spill: f32,
    pub ramp_s: f32,
    pub bump_fill_delta: f32,
    pub idle_wobble: f32,
    pub stable_wobble: f32,
    pub wobble_speed: f32,
    pub geometry: RigGeometry,
}

impl Default for DrinkParams {
    fn default() -> Self {
        Self {
            range: FillRange::default(),
            approach_s: 0.6,
            drink_s_per_unit: 2.0,
            return_s: 0.8,
            spill: 0.05,
            ramp_s: 0.5,
            bump_fill_delta: -0.2,
            idle_wobble: 0.05,
            stable_wobble: 0.01,
            wobble_speed: 1.0,
            geometry: RigGeometry::default(),
        }
    }
}

impl DrinkParams {
    /// Build from a loaded config; unset fields keep their defaults.
    pub fn from_cfg(cfg: &DrinkCfg) -> Result<Self, ParamsError> {
        let d = Self::default();
        let rest = match (cfg.rest_position, cfg.rest_euler_deg) {
            (None, None) => d.geometry.rest,
            (pos, euler) => {
                let [pitch, yaw, roll] = euler.unwrap_or([0.0; 3]);
                let pos = pos.map_or(d.geometry.rest.position, Vec3::from_array);
                Pose::from_euler_deg(pos, pitch, yaw, roll)
            }
        };
        let p = Self {
            range: FillRange {
                min: cfg.min_fill.unwrap_or(d.range.min),
                max: cfg.max_fill.unwrap_or(d.range.max),
            },
            approach_s: cfg.approach_s.unwrap_or(d.approach_s),
            drink_s_per_unit: cfg.drink_s_per_unit.unwrap_or(d.drink_s_per_unit),
            return_s: cfg.return_s.unwrap_or(d.return_s),
            spill: cfg.spill.unwrap_or(d.spill),
            ramp_s: cfg.ramp_s.unwrap_or(d.ramp_s),
            bump_fill_delta: cfg.bump_fill_delta.unwrap_or(d.bump_fill_delta),
            idle_wobble: cfg.idle_wobble.unwrap_or(d.idle_wobble),
            stable_wobble: cfg.stable_wobble.unwrap_or(d.stable_wobble),
            wobble_speed: cfg.wobble_speed.unwrap_or(d.wobble_speed),
            geometry: RigGeometry {
                rest,
                target_position: cfg
                    .target_position
                    .map_or(d.geometry.target_position, Vec3::from_array),
                max_height: cfg.max_height.unwrap_or(d.geometry.max_height),
                rest_tilt_deg: cfg.rest_tilt_deg.unwrap_or(d.geometry.rest_tilt_deg),
                max_tilt_deg: cfg.max_tilt_deg.unwrap_or(d.geometry.max_tilt_deg),
            },
        };
        p.validate()?;
        Ok(p)
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        let scalars = [
            ("min_fill", self.range.min),
            ("max_fill", self.range.max),
            ("approach_s", self.approach_s),
            ("drink_s_per_unit", self.drink_s_per_unit),
            ("return_s", self.return_s),
            ("spill", self.spill),
            ("ramp_s", self.ramp_s),
            ("bump_fill_delta", self.bump_fill_delta),
            ("idle_wobble", self.idle_wobble),
            ("stable_wobble", self.stable_wobble),
            ("wobble_speed", self.wobble_speed),
            ("max_height", self.geometry.max_height),
            ("rest_tilt_deg", self.geometry.rest_tilt_deg),
            ("max_tilt_deg", self.geometry.max_tilt_deg),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(ParamsError::NonFinite(field));
            }
        }
        if !self.geometry.rest.position.is_finite() {
            return Err(ParamsError::NonFinite("rest_position"));
        }
        if !self.geometry.target_position.is_finite() {
            return Err(ParamsError::NonFinite("target_position"));
        }
        if self.range.min > self.range.max {
            return Err(ParamsError::InvertedRange {
                min: self.range.min,
                max: self.range.max,
            });
        }
        let non_negative = [
            ("approach_s", self.approach_s),
            ("drink_s_per_unit", self.drink_s_per_unit),
            ("return_s", self.return_s),
            ("spill", self.spill),
            ("ramp_s", self.ramp_s),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ParamsError::Negative { field, value });
            }
        }
        Ok(())
    }
}
