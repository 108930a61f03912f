mod build_env;

pub use build_env::{BuildEnv, PROJECT_DIR_VAR};
