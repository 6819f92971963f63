//! # crudhub-service
//!
//! Service layer for CrudHub. [`CrudService`] forwards each CRUD verb to
//! the repository it was constructed with, so controllers never depend on
//! a concrete storage backend.
//!
//! Services follow constructor injection: the repository is provided at
//! construction time as an `Arc`.

pub mod crud;

pub use crud::{CategoryService, CrudService, UserService};
