//! data_runtime: config schemas and loaders for the drink rig.
//!
//! Everything here is plain data read from `data/` (TOML) with optional env
//! overrides, so the core crate and the harness share one source of truth.

pub mod loader;
pub mod scenario;
pub mod configs {
    pub mod drink;
    pub mod telemetry;
}
