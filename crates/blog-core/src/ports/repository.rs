use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogUser, PostSearch, UserSearch};
use crate::error::RepoError;

/// Generic repository trait over one document collection.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<(), RepoError>;

    /// Atomically replace the entity with the same ID, inserting it if absent.
    async fn replace(&self, entity: T) -> Result<(), RepoError>;

    /// Delete an entity by its ID, returning how many documents were removed.
    async fn delete(&self, id: ID) -> Result<u64, RepoError>;

    /// Drop every entity in the collection.
    async fn clear(&self) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<BlogUser, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<BlogUser>, RepoError>;

    async fn search(&self, search: &UserSearch) -> Result<Vec<BlogUser>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<BlogPost, Uuid> {
    async fn search(&self, search: &PostSearch) -> Result<Vec<BlogPost>, RepoError>;
}
