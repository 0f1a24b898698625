//! Domain types and rules for the ReelBase movie catalog.
//!
//! This crate has no database or HTTP dependencies so the permission table
//! and validation helpers can be unit-tested in isolation.

pub mod catalog;
pub mod error;
pub mod review;
pub mod roles;
pub mod types;
