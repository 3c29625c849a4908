//! sweep - ordered target-list cleanup
//!
//! Deletes an ordered list of target files in a single synchronous pass,
//! tolerating any individual failure without aborting the remaining work.
//!
//! # Architecture
//!
//! - **Injectable targets**: the list comes from CLI arguments or a TOML
//!   manifest, never from a literal baked into the runner.
//! - **Explicit outcomes**: each target resolves to `Deleted`, `Skipped`, or
//!   `Failed(reason)` instead of relying on a broad exception catch.
//! - **Reporter seam**: all user-visible lines flow through the
//!   [`ui::Reporter`] trait, so tests assert on emitted lines without
//!   capturing process output.
//!
//! # Output contract
//!
//! ```text
//! Deleted: <path>                      # successful removal
//! Error deleting <path>: <message>     # stat or unlink failure
//! Cleanup complete                     # always the final line
//! ```
//!
//! Absent targets are skipped silently and produce no line.

pub mod core;
pub mod ops;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use crate::core::manifest::Manifest;
pub use ops::DeleteError;
pub use types::{Outcome, TargetPath};
pub use ui::Reporter;

use dirs::home_dir;
use std::path::PathBuf;

/// Returns the sweep configuration directory, or None if the user's home
/// cannot be resolved.
pub fn try_sweep_home() -> Option<PathBuf> {
    if let Ok(val) = std::env::var("SWEEP_HOME") {
        return Some(PathBuf::from(val));
    }
    home_dir().map(|h| h.join(".sweep"))
}

/// Default manifest lookup: `sweep.toml` in the current directory, then
/// `~/.sweep/targets.toml`. Returns None when neither file exists.
pub fn default_manifest_path() -> Option<PathBuf> {
    let local = PathBuf::from("sweep.toml");
    if local.exists() {
        return Some(local);
    }
    let fallback = try_sweep_home()?.join("targets.toml");
    fallback.exists().then_some(fallback)
}
