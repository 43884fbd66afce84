pub mod error;
pub mod patch;
pub mod progress;
pub mod reporting;
pub mod types;
