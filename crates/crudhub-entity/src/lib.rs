//! # crudhub-entity
//!
//! Domain entity models for CrudHub. Every struct here is either a table
//! row (deriving `sqlx::FromRow`) or a payload accepted by the `store`
//! and `put` verbs.

pub mod category;
pub mod user;

pub use category::{Category, CategoryChanges, NewCategory};
pub use user::{NewUser, User, UserChanges};

