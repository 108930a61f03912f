//! Build-environment port.

use crate::domain::AppError;

/// Variable name under which the build tool exposes the project root.
pub const PROJECT_DIR_VAR: &str = "PROJECT_DIR";

/// Narrow interface onto the invoking build tool's environment.
///
/// The cleanup hook sees exactly two capabilities of the host build tool:
/// variable substitution and build-flag registration. Nothing else from the
/// environment leaks into the hook.
pub trait BuildEnv {
    /// Resolve a build-tool variable to its value.
    ///
    /// Only [`PROJECT_DIR_VAR`] is defined; any other variable is a
    /// configuration error.
    fn substitute(&self, variable: &str) -> Result<String, AppError>;

    /// Record an additional build-flag contribution.
    fn append_build_flags(&mut self, flags: &str);

    /// Flags contributed so far.
    fn flags(&self) -> &[String];
}
