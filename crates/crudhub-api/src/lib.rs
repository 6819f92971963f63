//! # crudhub-api
//!
//! HTTP API layer for CrudHub built on Axum.
//!
//! Provides the resource controllers, the health endpoint, middleware
//! (request logging, CORS), and extractors. Errors render through the
//! shared `AppError` response mapping.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
