//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` structs matching query output rows
//! - `Deserialize` create DTOs for inserts
//! - `Deserialize` update DTOs (all `Option` fields) for patches

pub mod award;
pub mod ban;
pub mod credit;
pub mod genre;
pub mod movie;
pub mod person;
pub mod review;
pub mod stats;
pub mod user;
pub mod user_list;
