//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod award_repo;
pub mod ban_repo;
pub mod credit_repo;
pub mod genre_repo;
pub mod movie_repo;
pub mod person_repo;
pub mod review_repo;
pub mod stats_repo;
pub mod user_list_repo;
pub mod user_repo;

pub use award_repo::AwardRepo;
pub use ban_repo::BanRepo;
pub use credit_repo::CreditRepo;
pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;
pub use person_repo::PersonRepo;
pub use review_repo::ReviewRepo;
pub use stats_repo::StatsRepo;
pub use user_list_repo::UserListRepo;
pub use user_repo::UserRepo;
