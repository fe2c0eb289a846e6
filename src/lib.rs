pub mod api;
pub mod error;
pub mod export;
pub mod parse;
pub mod types;

pub use error::SsqError;
pub use export::{ExportOutcome, ExportTargets};
pub use types::{DrawRecord, FetchConfig};
