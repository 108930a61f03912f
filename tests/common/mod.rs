//! Shared testing utilities for pioclean CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Relative paths the binary targets when no configuration file is present.
#[allow(dead_code)]
pub const DEFAULT_TARGETS: [&str; 2] = [
    ".pio/libdeps/teensy40/teensy-4-async-inputs/example1",
    ".pio/libdeps/teensy40/teensy-4-async-inputs/exampleESP32",
];

/// Testing harness providing an isolated project root for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    project_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated project root.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let project_dir = root.path().join("project");
        fs::create_dir_all(&project_dir).expect("Failed to create test project directory");

        Self { root, project_dir }
    }

    /// Path to the project root used for CLI invocations.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Absolute location of a project-relative path.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_dir.join(relative)
    }

    /// Create a target directory with a file inside, as a library example
    /// directory would look after `pio` materializes dependencies.
    pub fn create_target(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).expect("Failed to create target directory");
        fs::write(path.join("example.cpp"), "void setup() {}\n")
            .expect("Failed to seed target directory");
        path
    }

    /// Write a `pioclean.toml` listing the given cleanup paths.
    pub fn write_config(&self, paths: &[&str]) {
        let entries =
            paths.iter().map(|path| format!("\"{}\"", path)).collect::<Vec<_>>().join(", ");
        let content = format!("[cleanup]\npaths = [{}]\n", entries);
        fs::write(self.project_dir.join("pioclean.toml"), content)
            .expect("Failed to write pioclean.toml");
    }

    /// Build a command for the compiled `pioclean` binary running inside the
    /// project root, with the PlatformIO variable scrubbed from the child
    /// environment so only this context's state is visible.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("pioclean").expect("Failed to locate pioclean binary");
        cmd.current_dir(&self.project_dir).env_remove("PLATFORMIO_PROJECT_DIR");
        cmd
    }

    /// Assert that a project-relative path exists.
    pub fn assert_exists(&self, relative: &str) {
        assert!(self.path(relative).exists(), "{relative} should exist");
    }

    /// Assert that a project-relative path does not exist.
    pub fn assert_not_exists(&self, relative: &str) {
        assert!(!self.path(relative).exists(), "{relative} should not exist");
    }
}
