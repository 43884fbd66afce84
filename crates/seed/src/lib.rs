//! Demo-data generator for the game portal database.
//!
//! Fills every table with random but plausible rows so the API and the
//! reporting views have something to show. Used by the `gameportal-seed`
//! binary; exposed as a library so the population steps can be tested.

pub mod config;
pub mod fake;
pub mod populate;

pub use config::SeedConfig;
pub use populate::{run, SeedSummary};
