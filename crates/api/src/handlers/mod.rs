pub mod admin_catalog;
pub mod admin_users;
pub mod auth;
pub mod awards;
pub mod genres;
pub mod movies;
pub mod people;
pub mod reviews;
pub mod user_lists;
