//! Test doubles shared across unit tests.

use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::{BuildEnv, PROJECT_DIR_VAR};

/// In-memory `BuildEnv` pinned to a fixed project directory.
pub(crate) struct StaticBuildEnv {
    project_dir: PathBuf,
    flags: Vec<String>,
}

impl StaticBuildEnv {
    pub(crate) fn new<P: AsRef<Path>>(project_dir: P) -> Self {
        Self { project_dir: project_dir.as_ref().to_path_buf(), flags: Vec::new() }
    }
}

impl BuildEnv for StaticBuildEnv {
    fn substitute(&self, variable: &str) -> Result<String, AppError> {
        match variable {
            PROJECT_DIR_VAR => Ok(self.project_dir.display().to_string()),
            other => Err(AppError::Configuration(format!("Unknown build variable '{other}'"))),
        }
    }

    fn append_build_flags(&mut self, flags: &str) {
        self.flags.push(flags.to_string());
    }

    fn flags(&self) -> &[String] {
        &self.flags
    }
}
