//! Reporter trait for dependency injection
//!
//! This trait lets the runner report per-target outcomes without being
//! coupled to a specific output implementation, so tests can assert on
//! emitted lines without capturing real process output.

use crate::ops::DeleteError;
use crate::types::TargetPath;

pub trait Reporter: Send + Sync {
    /// A target was removed.
    fn deleted(&self, target: &TargetPath);

    /// A target exists and would be removed (dry run only).
    fn would_delete(&self, target: &TargetPath);

    /// Removal of a target failed with the given reason.
    fn failed(&self, target: &TargetPath, reason: &DeleteError);

    /// Log an informational message.
    fn info(&self, msg: &str);

    /// Log a warning message.
    fn warning(&self, msg: &str);

    /// The run is finished. Always the last thing emitted, regardless of how
    /// many individual targets failed.
    fn complete(&self);
}
