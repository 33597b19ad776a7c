//! Data path resolution and raw readers for files under `data/`.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Root of the data tree.
///
/// Prefers the top-level workspace `data/` so tests and tools can run from any
/// crate; falls back to a crate-local `data/`.
#[must_use]
pub fn data_root() -> PathBuf {
    let here = Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}

/// Read a file under `data/` (relative) or at an absolute path.
pub fn read_text(rel: impl AsRef<Path>) -> Result<String> {
    let rel = rel.as_ref();
    let path = if rel.is_absolute() || rel.is_file() {
        rel.to_path_buf()
    } else {
        data_root().join(rel)
    };
    fs::read_to_string(&path).with_context(|| format!("read data: {}", path.display()))
}

/// Read and deserialize a TOML file resolved like [`read_text`].
pub fn load_toml<T: DeserializeOwned>(rel: impl AsRef<Path>) -> Result<T> {
    let rel = rel.as_ref();
    let txt = read_text(rel)?;
    toml::from_str::<T>(&txt).with_context(|| format!("parse TOML: {}", rel.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_root_points_at_workspace_data() {
        let root = data_root();
        assert!(root.join("config").is_dir(), "missing {}", root.display());
    }

    #[test]
    fn read_text_reports_missing_path() {
        let err = read_text("config/does_not_exist.toml").unwrap_err();
        assert!(format!("{err:#}").contains("does_not_exist"));
    }
}
