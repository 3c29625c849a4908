//! Domain-specific errors for cleanup operations

use thiserror::Error;

/// Why a single target could not be deleted.
///
/// Display is the underlying I/O error text, which is what follows the colon
/// in an `Error deleting <path>: ...` line. The variant records which phase
/// failed; both phases are terminal for that one target and never abort the
/// remaining list.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// The existence check itself failed (anything other than a plain
    /// "not found", which is a silent skip).
    #[error("{0}")]
    Stat(std::io::Error),

    /// The target existed but could not be removed (permission denied,
    /// target is a directory, vanished between stat and unlink).
    #[error("{0}")]
    Remove(std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn display_is_the_io_error_text() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let expected = io_err.to_string();
        assert_eq!(DeleteError::Remove(io_err).to_string(), expected);
    }
}
