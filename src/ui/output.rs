//! Console reporter
//!
//! Writes the line-oriented output contract to stdout:
//!
//! ```text
//! Deleted: <path>
//! Error deleting <path>: <message>
//! Cleanup complete
//! ```
//!
//! Contract lines are always printed; `quiet` only gates informational
//! messages. Warnings go to stderr so stdout stays parseable.

use crate::ops::DeleteError;
use crate::types::TargetPath;
use crate::ui::Reporter;

/// Stdout-backed reporter used by the CLI.
#[derive(Debug, Clone)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    /// Create a reporter; `quiet` suppresses non-essential output.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Reporter for ConsoleReporter {
    fn deleted(&self, target: &TargetPath) {
        println!("Deleted: {target}");
    }

    fn would_delete(&self, target: &TargetPath) {
        println!("Would delete: {target}");
    }

    fn failed(&self, target: &TargetPath, reason: &DeleteError) {
        println!("Error deleting {target}: {reason}");
    }

    fn info(&self, msg: &str) {
        if !self.quiet {
            println!("{msg}");
        }
    }

    fn warning(&self, msg: &str) {
        if !self.quiet {
            eprintln!("Warning: {msg}");
        }
    }

    fn complete(&self) {
        println!("Cleanup complete");
    }
}
