//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::{PostRepository, UserRepository};
use blog_infra::DatabaseConfig;

#[cfg(feature = "mongodb")]
use blog_infra::DatabaseConnections;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { users, posts }
    }

    /// State backed by in-memory repositories.
    #[cfg(any(test, not(feature = "mongodb")))]
    pub fn in_memory() -> Self {
        use blog_infra::{InMemoryPostRepository, InMemoryUserRepository};

        Self::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
        )
    }

    /// Build the application state, connecting to the database once.
    ///
    /// A connection failure is returned to the caller; the process cannot serve without it.
    #[cfg(feature = "mongodb")]
    pub async fn init(db_config: &DatabaseConfig) -> anyhow::Result<Self> {
        let connections = DatabaseConnections::init(db_config).await?;
        tracing::info!("Application state initialized");
        Ok(Self::new(
            Arc::new(connections.users()),
            Arc::new(connections.posts()),
        ))
    }

    #[cfg(not(feature = "mongodb"))]
    pub async fn init(_db_config: &DatabaseConfig) -> anyhow::Result<Self> {
        tracing::info!("Running without mongodb feature - using in-memory repositories");
        Ok(Self::in_memory())
    }

    /// Drop both collections.
    #[cfg(test)]
    pub async fn flush(&self) -> Result<(), blog_core::RepoError> {
        self.users.clear().await?;
        self.posts.clear().await
    }
}
