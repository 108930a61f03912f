//! Pre-build cleanup of vendored example directories.

use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, CleanupReport, CleanupTarget};
use crate::ports::{BuildEnv, PROJECT_DIR_VAR};

const BANNER: &str = "=====================================";

/// Options for one cleanup pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanupOptions {
    /// Report what would be removed without deleting anything.
    pub dry_run: bool,
}

/// Run the pre-build cleanup over `targets`.
///
/// Each target is resolved against the project root, checked for existence,
/// and recursively deleted when present. Deletion failures propagate
/// immediately; targets not yet visited when an error aborts the pass are
/// left in whatever state they were in. Exactly one (empty) build-flag
/// contribution is appended per pass.
pub fn execute<E: BuildEnv>(
    env: &mut E,
    targets: &[CleanupTarget],
    options: CleanupOptions,
) -> Result<CleanupReport, AppError> {
    println!("{BANNER}");
    println!("Running pioclean pre-build cleanup");

    let project_dir = PathBuf::from(env.substitute(PROJECT_DIR_VAR)?);
    let mut report = CleanupReport { dry_run: options.dry_run, ..Default::default() };

    for target in targets {
        let path = target.resolve(&project_dir);
        println!("Checking path: {}", path.display());

        if path.exists() {
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            if options.dry_run {
                println!("Would remove {name} directory");
            } else {
                println!("Removing {name} directory...");
                fs::remove_dir_all(&path)?;
            }
            report.removed.push(path);
        } else {
            println!("Directory already removed: {}", path.display());
            report.absent.push(path);
        }
    }

    println!("{BANNER}");

    // The build tool expects a flag contribution from every hook; this one
    // has nothing to add.
    env.append_build_flags("");

    Ok(report)
}
