//! pioclean: pre-build cleanup of vendored example directories in
//! PlatformIO `libdeps` caches.
//!
//! PlatformIO materializes third-party library sources under
//! `.pio/libdeps/<board>/<library>/` before compiling. Some libraries ship
//! example subtrees that break the build when picked up by the library
//! dependency finder. This crate is registered as a pre-build extra step and
//! deletes those directories before any compilation unit is processed.

pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

pub use domain::{AppError, CleanupReport, CleanupTarget, DEFAULT_TARGETS};
pub use ports::{BuildEnv, PROJECT_DIR_VAR};
pub use services::{CleanupOptions, ProcessBuildEnv};

use services::cleanup;

/// Run the pre-build cleanup for a project.
///
/// The project root comes from `project_dir`, falling back to
/// `$PLATFORMIO_PROJECT_DIR` and then the current directory. Targets come
/// from `pioclean.toml` in the project root, or the built-in defaults when
/// no such file exists.
pub fn run(project_dir: Option<PathBuf>, dry_run: bool) -> Result<CleanupReport, AppError> {
    let mut env = ProcessBuildEnv::new(project_dir)?;
    let targets = config::load_targets(env.project_dir())?;
    cleanup::execute(&mut env, &targets, CleanupOptions { dry_run })
}

/// Resolve the configured target list without touching any target.
pub fn targets(project_dir: Option<PathBuf>) -> Result<Vec<CleanupTarget>, AppError> {
    let env = ProcessBuildEnv::new(project_dir)?;
    config::load_targets(env.project_dir())
}
