//! HTTP request handlers, one module per resource.

pub mod categories;
pub mod crud;
pub mod health;
pub mod users;
