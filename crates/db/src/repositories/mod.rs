//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod company_repo;
pub mod game_repo;
pub mod genre_repo;
pub mod progress_repo;
pub mod review_repo;
pub mod stats_repo;
pub mod user_repo;

pub use company_repo::CompanyRepo;
pub use game_repo::GameRepo;
pub use genre_repo::GenreRepo;
pub use progress_repo::ProgressRepo;
pub use review_repo::ReviewRepo;
pub use stats_repo::StatsRepo;
pub use user_repo::UserRepo;
