//! Custom Axum extractors.

pub mod json;
pub mod pagination;
pub mod path;
pub mod query;

pub use json::JsonBody;
pub use pagination::PaginationParams;
pub use path::parse_id;
pub use query::QueryParams;
