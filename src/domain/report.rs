use std::path::PathBuf;

use serde::Serialize;

/// Summary of one cleanup pass, serializable for machine-readable output.
#[derive(Debug, Default, Serialize)]
pub struct CleanupReport {
    /// Resolved paths that existed and were deleted (or would be, under
    /// dry-run).
    pub removed: Vec<PathBuf>,
    /// Resolved paths that were already absent.
    pub absent: Vec<PathBuf>,
    /// Whether this pass left the filesystem untouched.
    pub dry_run: bool,
}
