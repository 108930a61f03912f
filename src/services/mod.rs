pub mod cleanup;
mod process_env;

pub use cleanup::CleanupOptions;
pub use process_env::ProcessBuildEnv;
