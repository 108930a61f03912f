//! Process-backed build environment adapter.

use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::{BuildEnv, PROJECT_DIR_VAR};

/// Environment variable PlatformIO exports to spawned extra scripts.
const PLATFORMIO_PROJECT_DIR: &str = "PLATFORMIO_PROJECT_DIR";

/// `BuildEnv` backed by the invoking process.
///
/// The project root comes from an explicit override, the PlatformIO
/// environment variable, or the current directory, in that order. Flag
/// contributions are collected in memory.
#[derive(Debug)]
pub struct ProcessBuildEnv {
    project_dir: PathBuf,
    flags: Vec<String>,
}

impl ProcessBuildEnv {
    /// Create an environment for the given project root override.
    pub fn new(project_dir_override: Option<PathBuf>) -> Result<Self, AppError> {
        let project_dir = match project_dir_override {
            Some(dir) => dir,
            None => match std::env::var_os(PLATFORMIO_PROJECT_DIR) {
                Some(dir) => PathBuf::from(dir),
                None => std::env::current_dir()?,
            },
        };
        Ok(Self { project_dir, flags: Vec::new() })
    }

    /// The resolved project root.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }
}

impl BuildEnv for ProcessBuildEnv {
    fn substitute(&self, variable: &str) -> Result<String, AppError> {
        match variable {
            PROJECT_DIR_VAR => {
                self.project_dir.to_str().map(str::to_string).ok_or_else(|| {
                    AppError::configuration(format!(
                        "Project directory contains invalid unicode: {}",
                        self.project_dir.display()
                    ))
                })
            }
            other => Err(AppError::configuration(format!("Unknown build variable '{other}'"))),
        }
    }

    fn append_build_flags(&mut self, flags: &str) {
        self.flags.push(flags.to_string());
    }

    fn flags(&self) -> &[String] {
        &self.flags
    }
}
