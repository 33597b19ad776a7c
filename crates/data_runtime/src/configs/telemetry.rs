//! Logging configuration loaded from data/config/telemetry.toml with env overrides.

use anyhow::Result;
use serde::Deserialize;

use crate::loader::{data_root, load_toml};

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryCfg {
    /// `env_logger` filter directive, e.g. `info` or `info,drink_core=debug`.
    pub log_level: Option<String>,
    /// Emit per-frame trace lines from the harness.
    pub trace_frames: Option<bool>,
}

impl Default for TelemetryCfg {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            trace_frames: Some(false),
        }
    }
}

impl TelemetryCfg {
    #[must_use]
    pub fn filter(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}

pub fn load_default() -> Result<TelemetryCfg> {
    let path = data_root().join("config/telemetry.toml");
    let mut cfg = if path.is_file() {
        load_toml::<TelemetryCfg>(&path)?
    } else {
        TelemetryCfg::default()
    };
    // Env overrides
    if let Ok(lvl) = std::env::var("LOG_LEVEL") {
        cfg.log_level = Some(lvl);
    }
    if let Some(v) = std::env::var("TRACE_FRAMES").ok().and_then(|v| v.parse().ok()) {
        cfg.trace_frames = Some(v);
    }
    Ok(cfg)
}
