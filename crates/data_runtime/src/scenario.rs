//! Scripted input timelines replayed by the headless harness.
//!
//! A scenario is a list of steps; each step holds a set of controls for a
//! duration and may fire the bump control on its first frame.

use anyhow::{Result, ensure};
use serde::Deserialize;
use std::path::Path;

use crate::loader::load_toml;

/// Named controls as they appear in scenario files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlName {
    North,
    South,
    East,
    West,
    Trigger,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Step {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub hold: Vec<ControlName>,
    pub duration_s: f32,
    #[serde(default)]
    pub bump: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Scenario {
    #[serde(default = "default_dt")]
    pub dt: f32,
    #[serde(default)]
    pub initial_fill: Option<f32>,
    pub steps: Vec<Step>,
}

fn default_dt() -> f32 {
    1.0 / 60.0
}

impl Scenario {
    /// Reject timelines that could never advance.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.dt.is_finite() && self.dt > 0.0, "dt must be > 0 (got {})", self.dt);
        ensure!(!self.steps.is_empty(), "scenario has no steps");
        for (i, s) in self.steps.iter().enumerate() {
            ensure!(
                s.duration_s.is_finite() && s.duration_s >= 0.0,
                "step {i}: duration_s must be >= 0 (got {})",
                s.duration_s
            );
        }
        Ok(())
    }

    /// Total scripted time in seconds.
    #[must_use]
    pub fn total_s(&self) -> f32 {
        self.steps.iter().map(|s| s.duration_s).sum()
    }
}

pub fn parse(txt: &str) -> Result<Scenario> {
    let scn: Scenario = toml::from_str(txt)?;
    scn.validate()?;
    Ok(scn)
}

/// Load a scenario from `data/` (relative) or an explicit path.
pub fn load(path: impl AsRef<Path>) -> Result<Scenario> {
    let scn: Scenario = load_toml(path)?;
    scn.validate()?;
    Ok(scn)
}
