//! # crudhub-core
//!
//! Core crate for CrudHub. Contains the CRUD capability contract,
//! configuration schemas, typed identifiers, pagination and form types,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other CrudHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
pub use traits::{CrudRepository, Resource};
