//! Repository set that dispatches to the configured provider.

use std::sync::Arc;

use tracing::info;

use crudhub_core::config::{DatabaseConfig, DatabaseProvider};
use crudhub_core::result::AppResult;
use crudhub_entity::{Category, User};

use crate::connection::DatabasePool;
use crate::migration::run_migrations;
use crate::repositories::{
    CategoryRepository, DynCategoryRepository, DynUserRepository, MemoryRepository,
    UserRepository,
};

/// The repositories backing every resource.
///
/// The provider is selected at construction time based on configuration.
#[derive(Clone)]
pub struct Repositories {
    provider: DatabaseProvider,
    /// Repository serving the users resource.
    pub users: Arc<DynUserRepository>,
    /// Repository serving the categories resource.
    pub categories: Arc<DynCategoryRepository>,
    pool: Option<DatabasePool>,
}

impl Repositories {
    /// Build the repositories for the configured provider.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            DatabaseProvider::Postgres => {
                info!("Initializing PostgreSQL repositories");
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self::postgres(pool))
            }
            DatabaseProvider::Memory => {
                info!("Initializing in-memory repositories");
                Ok(Self::in_memory())
            }
        }
    }

    /// Repositories over an existing PostgreSQL pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        Self {
            provider: DatabaseProvider::Postgres,
            users: Arc::new(UserRepository::new(pool.pool().clone())),
            categories: Arc::new(CategoryRepository::new(pool.pool().clone())),
            pool: Some(pool),
        }
    }

    /// Empty process-local repositories.
    pub fn in_memory() -> Self {
        Self {
            provider: DatabaseProvider::Memory,
            users: Arc::new(MemoryRepository::<User>::new()),
            categories: Arc::new(MemoryRepository::<Category>::new()),
            pool: None,
        }
    }

    /// The active provider.
    pub fn provider(&self) -> DatabaseProvider {
        self.provider
    }

    /// Check that the backing store is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release any held connections.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

impl std::fmt::Debug for Repositories {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repositories")
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}
