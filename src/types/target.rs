use std::path::{Path, PathBuf};

/// One filesystem location the runner will attempt to delete.
///
/// Wraps the authored path verbatim: no canonicalization, no normalization.
/// Status lines print the path exactly as it was given, so `TargetPath`
/// displays via [`Path::display`] rather than any lossy rewrite.
///
/// # Example
///
/// ```
/// use sweep::types::TargetPath;
///
/// let target = TargetPath::new("/tmp/stale.lock");
/// assert_eq!(target.to_string(), "/tmp/stale.lock");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TargetPath(PathBuf);

impl TargetPath {
    /// Create a target from any path-like value.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Borrow the underlying path.
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl std::fmt::Display for TargetPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for TargetPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for TargetPath {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&Path> for TargetPath {
    fn from(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}

impl From<&str> for TargetPath {
    fn from(path: &str) -> Self {
        Self(PathBuf::from(path))
    }
}
