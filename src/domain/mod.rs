pub mod error;
pub mod report;
pub mod target;

pub use error::AppError;
pub use report::CleanupReport;
pub use target::{CleanupTarget, DEFAULT_TARGETS};
