//! The cleanup runner
//!
//! Walks the target list once, in order, attempting to delete each file.
//! Every failure is captured into that target's outcome and reported; nothing
//! aborts the remaining work.

use std::fs;
use std::io;

use crate::ops::error::DeleteError;
use crate::types::{Outcome, TargetPath};
use crate::ui::Reporter;

/// Attempt removal of each target in list order.
///
/// Absent targets are skipped silently: the stat gates both the deletion
/// attempt and any reporting for that target. The closing "Cleanup complete"
/// line is emitted unconditionally once the list is exhausted.
///
/// Returns the ordered per-target outcomes so callers can aggregate counts.
/// Per-target failures never surface as an error return.
pub fn run<R: Reporter>(
    reporter: &R,
    targets: &[TargetPath],
    dry_run: bool,
) -> Vec<(TargetPath, Outcome)> {
    let mut outcomes = Vec::with_capacity(targets.len());

    for target in targets {
        let outcome = delete_one(reporter, target, dry_run);
        outcomes.push((target.clone(), outcome));
    }

    reporter.complete();
    outcomes
}

/// Process a single target: stat, then unlink if present.
fn delete_one<R: Reporter>(reporter: &R, target: &TargetPath, dry_run: bool) -> Outcome {
    // Follows symlinks, matching the existence check that gates deletion.
    match fs::metadata(target.as_path()) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Outcome::Skipped,
        Err(e) => {
            let err = DeleteError::Stat(e);
            reporter.failed(target, &err);
            return Outcome::Failed(err);
        }
        Ok(_) => {}
    }

    if dry_run {
        reporter.would_delete(target);
        return Outcome::Deleted;
    }

    match fs::remove_file(target.as_path()) {
        Ok(()) => {
            reporter.deleted(target);
            Outcome::Deleted
        }
        Err(e) => {
            let err = DeleteError::Remove(e);
            reporter.failed(target, &err);
            Outcome::Failed(err)
        }
    }
}
