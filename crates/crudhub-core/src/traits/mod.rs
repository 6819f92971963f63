//! Core traits defined in `crudhub-core` and implemented by other crates.

pub mod crud;
pub mod resource;

pub use crud::CrudRepository;
pub use resource::Resource;
