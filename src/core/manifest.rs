use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::types::TargetPath;

/// TOML target list:
///
/// ```toml
/// targets = [
///     "/srv/app/icon.ico",
///     "/srv/app/favicon.ico",
/// ]
/// ```
///
/// Targets are processed in file order. Duplicates are legal; the second
/// occurrence finds the file already gone and skips it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub targets: Vec<TargetPath>,
}

impl Manifest {
    /// Load and parse a manifest. Read and parse failures are configuration
    /// errors and propagate; they are not per-target outcomes.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let manifest: Manifest = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(manifest)
    }
}
