//! Clean command

use std::path::{Path, PathBuf};

use anyhow::Result;

use sweep::core::manifest::Manifest;
use sweep::types::TargetPath;
use sweep::ui::{ConsoleReporter, Reporter};
use sweep::{default_manifest_path, ops};

/// Delete every target in list order, tolerating per-target failures.
///
/// Targets come from the positional paths when given, otherwise from the
/// manifest (explicit flag, then the default lookup). Per-target failures
/// never affect the exit status; only configuration errors do.
pub fn clean(paths: &[PathBuf], manifest: Option<&Path>, dry_run: bool, quiet: bool) -> Result<()> {
    let reporter = ConsoleReporter::new(quiet);

    let targets = resolve_targets(&reporter, paths, manifest)?;
    let outcomes = ops::clean::run(&reporter, &targets, dry_run);

    let deleted = outcomes.iter().filter(|(_, o)| o.is_deleted()).count();
    let failed = outcomes.iter().filter(|(_, o)| o.is_failed()).count();
    let skipped = outcomes.len() - deleted - failed;
    tracing::debug!(deleted, skipped, failed, dry_run, "cleanup finished");

    Ok(())
}

/// Resolution order: positional paths, `--manifest`, default manifest lookup.
/// With none of the three, the target list is empty and the run only emits
/// the closing line.
fn resolve_targets(
    reporter: &ConsoleReporter,
    paths: &[PathBuf],
    manifest: Option<&Path>,
) -> Result<Vec<TargetPath>> {
    if !paths.is_empty() {
        return Ok(paths.iter().map(TargetPath::new).collect());
    }

    if let Some(path) = manifest {
        return Ok(Manifest::load(path)?.targets);
    }

    if let Some(path) = default_manifest_path() {
        reporter.info(&format!("Using manifest {}", path.display()));
        return Ok(Manifest::load(&path)?.targets);
    }

    reporter.warning("no targets configured; nothing to delete");
    Ok(Vec::new())
}
