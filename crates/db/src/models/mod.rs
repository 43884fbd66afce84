//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! `stats` holds the read-only row shapes of the reporting functions and views.

pub mod company;
pub mod game;
pub mod genre;
pub mod progress;
pub mod review;
pub mod stats;
pub mod user;
