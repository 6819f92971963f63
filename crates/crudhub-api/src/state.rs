//! Application state shared across all handlers.

use std::sync::Arc;
use std::time::Instant;

use crudhub_core::config::AppConfig;
use crudhub_database::Repositories;
use crudhub_service::{CategoryService, CrudService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Repositories for the configured provider
    pub repositories: Repositories,
    /// Users delegator
    pub users: UserService,
    /// Categories delegator
    pub categories: CategoryService,
    /// Process start time, reported by the health endpoint
    pub started_at: Instant,
}

impl AppState {
    /// Builds one delegator per resource from the given repositories.
    pub fn new(config: AppConfig, repositories: Repositories) -> Self {
        Self {
            config: Arc::new(config),
            users: CrudService::new(Arc::clone(&repositories.users)),
            categories: CrudService::new(Arc::clone(&repositories.categories)),
            repositories,
            started_at: Instant::now(),
        }
    }
}
