//! Target-list configuration loading.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{AppError, CleanupTarget};

/// Name of the optional per-project configuration file.
pub const CONFIG_FILE: &str = "pioclean.toml";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    cleanup: CleanupSection,
}

#[derive(Debug, Default, Deserialize)]
struct CleanupSection {
    /// Project-relative directories to delete before the build.
    #[serde(default)]
    paths: Vec<String>,
}

/// Resolve the target list for a project.
///
/// Reads `pioclean.toml` from the project root when present; otherwise the
/// built-in defaults apply. Every configured path is validated before any
/// filesystem mutation happens.
pub fn load_targets(project_dir: &Path) -> Result<Vec<CleanupTarget>, AppError> {
    let config_path = project_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(CleanupTarget::defaults());
    }

    let content = fs::read_to_string(&config_path)?;
    let parsed: ConfigFile = toml::from_str(&content).map_err(|err| {
        AppError::configuration(format!("Failed to parse {}: {}", config_path.display(), err))
    })?;

    parsed.cleanup.paths.iter().map(|raw| CleanupTarget::new(raw)).collect()
}
