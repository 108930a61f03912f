//! Cleanup targets: validated project-relative paths slated for removal.

use std::path::{Component, Path, PathBuf};

use super::AppError;

/// Example directories vendored inside the teensy-4-async-inputs library
/// distribution. Removed on every build unless `pioclean.toml` overrides
/// the target list.
pub const DEFAULT_TARGETS: [&str; 2] = [
    ".pio/libdeps/teensy40/teensy-4-async-inputs/example1",
    ".pio/libdeps/teensy40/teensy-4-async-inputs/exampleESP32",
];

/// A validated relative path under the project root.
///
/// Targets must be relative and free of `..` components so a cleanup pass
/// can never reach outside the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupTarget {
    relative: PathBuf,
}

impl CleanupTarget {
    /// Validate a configured path string.
    pub fn new(raw: &str) -> Result<Self, AppError> {
        if raw.trim().is_empty() {
            return Err(AppError::InvalidTarget(raw.to_string()));
        }

        let path = Path::new(raw);
        if path.is_absolute() {
            return Err(AppError::InvalidTarget(raw.to_string()));
        }

        let mut has_normal = false;
        for component in path.components() {
            match component {
                Component::Normal(_) => has_normal = true,
                Component::CurDir => {}
                _ => return Err(AppError::InvalidTarget(raw.to_string())),
            }
        }

        // A target of bare `.` components would resolve to the project root
        // itself and delete the whole project.
        if !has_normal {
            return Err(AppError::InvalidTarget(raw.to_string()));
        }

        Ok(Self { relative: path.to_path_buf() })
    }

    /// Built-in targets used when no configuration file is present.
    pub fn defaults() -> Vec<Self> {
        DEFAULT_TARGETS.iter().map(|raw| Self { relative: PathBuf::from(raw) }).collect()
    }

    /// The project-relative path.
    pub fn relative(&self) -> &Path {
        &self.relative
    }

    /// Absolute location of this target under `project_dir`.
    pub fn resolve(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.relative)
    }
}
