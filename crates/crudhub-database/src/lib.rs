//! # crudhub-database
//!
//! PostgreSQL connection management, migrations, and the concrete
//! repositories behind each resource. A process-local provider backs the
//! same contract for development and tests.

pub mod connection;
pub mod migration;
pub mod provider;
pub mod repositories;

pub use connection::DatabasePool;
pub use provider::Repositories;
