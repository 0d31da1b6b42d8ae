// Re-export modules
pub mod config;
pub mod error;
pub mod export;
pub mod fetchers;
pub mod harvest;
pub mod parsers;
pub mod results;
pub mod source;
pub mod summary;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::HarvestConfig;
pub use harvest::Harvest;
pub use results::{FetchStatus, HeadingLevel, PageMetadata, ResultRow};
pub use summary::Summary;
