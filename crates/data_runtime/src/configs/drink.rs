//! Drink rig tuning loaded from data/config/drink.toml with env overrides.
//!
//! Every field is optional; consumers fall back to [`DrinkCfg::default`] for
//! anything the file leaves out.

use anyhow::Result;
use serde::Deserialize;

use crate::loader::{data_root, load_toml};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DrinkCfg {
    // Timing (seconds)
    pub approach_s: Option<f32>,
    /// Seconds needed to drink one unit of fill.
    pub drink_s_per_unit: Option<f32>,
    pub return_s: Option<f32>,
    pub ramp_s: Option<f32>,
    // Liquid
    pub min_fill: Option<f32>,
    pub max_fill: Option<f32>,
    /// Cosmetic fill dip applied while the hand approaches the glass.
    pub spill: Option<f32>,
    /// Signed fill delta ramped in when the bump control is pressed.
    pub bump_fill_delta: Option<f32>,
    pub idle_wobble: Option<f32>,
    pub stable_wobble: Option<f32>,
    pub wobble_speed: Option<f32>,
    // Rig geometry (meters / degrees, euler order pitch-yaw-roll)
    pub rest_position: Option<[f32; 3]>,
    pub rest_euler_deg: Option<[f32; 3]>,
    pub target_position: Option<[f32; 3]>,
    pub max_height: Option<f32>,
    pub rest_tilt_deg: Option<f32>,
    pub max_tilt_deg: Option<f32>,
}

impl Default for DrinkCfg {
    fn default() -> Self {
        Self {
            approach_s: Some(0.6),
            drink_s_per_unit: Some(2.0),
            return_s: Some(0.8),
            ramp_s: Some(0.5),
            min_fill: Some(0.0),
            max_fill: Some(1.0),
            spill: Some(0.05),
            bump_fill_delta: Some(-0.2),
            idle_wobble: Some(0.05),
            stable_wobble: Some(0.01),
            wobble_speed: Some(1.0),
            rest_position: Some([0.32, -0.45, 0.55]),
            rest_euler_deg: Some([0.0, 0.0, 0.0]),
            target_position: Some([0.05, -0.12, 0.28]),
            max_height: Some(0.04),
            rest_tilt_deg: Some(-5.0),
            max_tilt_deg: Some(80.0),
        }
    }
}

impl DrinkCfg {
    /// Fill any `None` field from the defaults.
    #[must_use]
    pub fn or_defaults(self) -> Self {
        let d = Self::default();
        Self {
            approach_s: self.approach_s.or(d.approach_s),
            drink_s_per_unit: self.drink_s_per_unit.or(d.drink_s_per_unit),
            return_s: self.return_s.or(d.return_s),
            ramp_s: self.ramp_s.or(d.ramp_s),
            min_fill: self.min_fill.or(d.min_fill),
            max_fill: self.max_fill.or(d.max_fill),
            spill: self.spill.or(d.spill),
            bump_fill_delta: self.bump_fill_delta.or(d.bump_fill_delta),
            idle_wobble: self.idle_wobble.or(d.idle_wobble),
            stable_wobble: self.stable_wobble.or(d.stable_wobble),
            wobble_speed: self.wobble_speed.or(d.wobble_speed),
            rest_position: self.rest_position.or(d.rest_position),
            rest_euler_deg: self.rest_euler_deg.or(d.rest_euler_deg),
            target_position: self.target_position.or(d.target_position),
            max_height: self.max_height.or(d.max_height),
            rest_tilt_deg: self.rest_tilt_deg.or(d.rest_tilt_deg),
            max_tilt_deg: self.max_tilt_deg.or(d.max_tilt_deg),
        }
    }

    /// Apply `DRINK_*` env overrides for quick tuning.
    pub fn apply_env(&mut self) {
        fn parse(key: &str) -> Option<f32> {
            std::env::var(key).ok().and_then(|v| v.parse().ok())
        }
        if let Some(v) = parse("DRINK_APPROACH_S") {
            self.approach_s = Some(v);
        }
        if let Some(v) = parse("DRINK_S_PER_UNIT") {
            self.drink_s_per_unit = Some(v);
        }
        if let Some(v) = parse("DRINK_RETURN_S") {
            self.return_s = Some(v);
        }
        if let Some(v) = parse("DRINK_SPILL") {
            self.spill = Some(v);
        }
        if let Some(v) = parse("DRINK_RAMP_S") {
            self.ramp_s = Some(v);
        }
        if let Some(v) = parse("DRINK_BUMP_DELTA") {
            self.bump_fill_delta = Some(v);
        }
    }
}

/// Parse a drink config from TOML text; missing fields take defaults.
pub fn parse(txt: &str) -> Result<DrinkCfg> {
    let cfg: DrinkCfg = toml::from_str(txt)?;
    Ok(cfg.or_defaults())
}

/// Load `config/drink.toml` (or defaults when absent) and apply env overrides.
pub fn load_default() -> Result<DrinkCfg> {
    let path = data_root().join("config/drink.toml");
    let mut cfg = if path.is_file() {
        load_toml::<DrinkCfg>(&path)?.or_defaults()
    } else {
        DrinkCfg::default()
    };
    cfg.apply_env();
    Ok(cfg)
}
